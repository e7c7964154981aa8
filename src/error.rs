/*!
Errors raised when resolving a runtime key
*/
use num::BigInt;
use thiserror::Error;

/// A key resolution error
///
/// Compile-time constructs never produce these: an invalid key there is a build failure. Only the
/// runtime twins, whose keys are not known until the program runs, can fail.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// A negative key was given to a construct with no base case below zero
    #[error("negative key {0}: no base case is reachable")]
    NegativeKey(i128),
    /// The key could not be read as an integer, such as a fractional or non-finite float
    #[error("key is not an integer")]
    NotAnInteger,
    /// The key is an integer, but does not fit the construct's key type
    #[error("key {0} is out of range")]
    KeyOutOfRange(BigInt),
    /// The factorial of this key overflows a `u128`
    #[error("factorial of {0} overflows a u128")]
    Overflow(u32),
}
