/*!
`rain-static` encodes control flow as computation resolved during compilation.

Each construct is a unit type parameterized by a key (a boolean, an integer or a type-level natural number). The
compiler picks the behavior of a unit from its key: the specific binding for that exact key if there is one, and
the generic behavior otherwise. Nothing is left to dispatch on when the program runs, and a key with no
terminating resolution is a build failure rather than a runtime error.

The constructs are
- conditionals, [`If`](control::ternary::If), keyed by a boolean
- type selectors, [`Selected`](control::select::Selected), choosing between two arbitrary types
- switches, [`Switch`](control::switch::Switch), keyed by an integer with a default case
- loops, [`Loop`](control::rec::Loop), keyed by a type-level natural depth
- factorials, [`Factorial`](control::rec::Factorial), keyed by a natural number

Every construct also has a runtime twin performing the same resolution over a key supplied while the program
runs, which must then be checked explicitly: see the [`key`] module.
*/
#![forbid(unsafe_code, missing_docs, missing_debug_implementations)]

pub mod util;

pub mod control;
pub mod key;
pub mod primitive;
pub mod showcase;

mod error;
pub use error::Error;
