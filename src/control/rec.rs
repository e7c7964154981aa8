/*!
Recursor units, describing primitive recursion on a natural number key.

# Implementation Notes
A [`Loop`] is keyed by a type-level [`Nat`](crate::primitive::nat::Nat), and is resolved by the trait solver: the
generic unit `Loop<Succ<N>>` is defined in terms of `Loop<N>`, and `Loop<Zero>` is the specific binding which ends
the recursion. A [`Factorial`] is keyed by a const `u32` and resolved by const evaluation. In both cases a key with
no terminating resolution is rejected during compilation: negative keys cannot be written, and an overflowing
factorial panics the const evaluator.
*/
use super::Exec;
use crate::key;
use crate::primitive::nat::{Nat, Succ, Zero};
use crate::Error;
use itertools::Itertools;
use num::{BigUint, One, ToPrimitive};
use smallvec::SmallVec;
use std::io::{self, Write};
use std::marker::PhantomData;

/// The largest key whose factorial fits in a `u128`
pub const MAX_FACTORIAL_KEY: u32 = 34;

/// The deepest loop which can be traced or requested with a runtime key
pub const MAX_LOOP_DEPTH: u32 = 1 << 16;

/// A counted loop unit of depth `N`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Loop<N>(PhantomData<N>);

impl Exec for Loop<Zero> {
    fn exec_in<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
        write!(out, "{}{}{}", Marker::Pre(0), Marker::Break, Marker::Post(0))
    }
}

impl<N: Nat> Exec for Loop<Succ<N>>
where
    Loop<N>: Exec,
{
    fn exec_in<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
        let depth = <Succ<N>>::VALUE;
        write!(out, "{}", Marker::Pre(depth))?;
        Loop::<N>::exec_in(out)?;
        write!(out, "{}", Marker::Post(depth))
    }
}

/// A marker emitted by a loop
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Marker {
    /// Emitted on the way down, before recursing
    Pre(u32),
    /// Emitted once, at depth zero
    Break,
    /// Emitted on the way back up, after recursing
    Post(u32),
}

crate::quick_display!(Marker, s, fmt => match s {
    Marker::Pre(depth) => write!(fmt, "A{} ", depth),
    Marker::Break => writeln!(fmt),
    Marker::Post(depth) => write!(fmt, "B{} ", depth),
});

/// The markers emitted by a loop, in order
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Trace(pub SmallVec<[Marker; 32]>);

impl Trace {
    /// Get the markers of this trace
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.0
    }
    /// Get the number of markers in this trace
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Check whether this trace is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

crate::quick_display!(Trace, s, fmt => write!(fmt, "{}", s.0.iter().format("")));
crate::debug_from_display!(Trace);

/// Compute the markers of a loop of the given depth, which may be at most [`MAX_LOOP_DEPTH`]
pub fn markers(depth: u32) -> Result<Trace, Error> {
    if depth > MAX_LOOP_DEPTH {
        return Err(Error::KeyOutOfRange(depth.into()));
    }
    let mut trace: SmallVec<[Marker; 32]> = SmallVec::with_capacity(2 * depth as usize + 3);
    trace.extend((0..=depth).rev().map(Marker::Pre));
    trace.push(Marker::Break);
    trace.extend((0..=depth).map(Marker::Post));
    Ok(Trace(trace))
}

/// Read a loop depth only known at runtime, rejecting negative depths and depths above [`MAX_LOOP_DEPTH`]
pub fn loop_depth<I: ToPrimitive>(depth: I) -> Result<u32, Error> {
    let depth = key::natural(depth)?;
    if depth > MAX_LOOP_DEPTH {
        return Err(Error::KeyOutOfRange(depth.into()));
    }
    Ok(depth)
}

/// Unroll a loop of the given depth into `out`.
///
/// The markers are written in the order a [`Loop`] unit emits them, but without recursing, so the depth is
/// bounded by the output alone.
pub fn unroll_in<W: Write + ?Sized>(depth: u32, out: &mut W) -> io::Result<()> {
    tracing::trace!(depth, "unrolling loop");
    for level in (0..=depth).rev() {
        write!(out, "{}", Marker::Pre(level))?;
    }
    write!(out, "{}", Marker::Break)?;
    for level in 0..=depth {
        write!(out, "{}", Marker::Post(level))?;
    }
    Ok(())
}

/// Compute the factorial of `n`, or `None` if it overflows a `u128`
pub const fn checked_factorial(n: u32) -> Option<u128> {
    if n == 0 {
        return Some(1);
    }
    match checked_factorial(n - 1) {
        Some(prev) => prev.checked_mul(n as u128),
        None => None,
    }
}

/// A factorial unit with key `N`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Factorial<const N: u32>;

impl<const N: u32> Factorial<N> {
    /// The factorial of `N`, computed during compilation
    pub const RESULT: u128 = match checked_factorial(N) {
        Some(result) => result,
        None => panic!("factorial overflows a u128"),
    };
}

/// Compute the factorial of a key only known at runtime
pub fn factorial<I: ToPrimitive>(n: I) -> Result<u128, Error> {
    let n = key::natural(n)?;
    let result = checked_factorial(n).ok_or(Error::Overflow(n));
    tracing::trace!(n, ?result, "computed factorial");
    result
}

/// Compute the factorial of `n` to arbitrary precision
pub fn factorial_big(n: u32) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, k| acc * BigUint::from(k))
}
