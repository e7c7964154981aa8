/*!
Switch units on integer keys

# Implementation Notes
The domain of a switch key is every `i64`, so it is never exhausted by specific bindings: resolution is an ordered
`match` against the bound cases followed by a mandatory default arm. The same `const fn` resolves both the
compile-time [`Switch`] unit and the runtime [`Case::resolve`], so the two can never disagree.
*/
use super::Exec;
use crate::key;
use num::ToPrimitive;
use std::convert::TryFrom;
use std::io::{self, Write};

/// A switch unit keyed by the integer `K`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Switch<const K: i64>;

impl<const K: i64> Switch<K> {
    /// The case this unit resolves to, computed during compilation
    pub const CASE: Case = Case::of(K);
}

impl<const K: i64> Exec for Switch<K> {
    #[inline]
    fn exec_in<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
        Self::CASE.exec_in(out)
    }
}

/// A case of a switch
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Case {
    /// The case bound to the key `1`
    One,
    /// The case bound to the key `2`
    Two,
    /// The default case, taken for every unbound key
    Default,
}

impl Case {
    /// Resolve the case for a given key
    #[inline]
    pub const fn of(key: i64) -> Case {
        match key {
            1 => Case::One,
            2 => Case::Two,
            _ => Case::Default,
        }
    }
    /// Resolve the case for a key only known at runtime.
    ///
    /// This is total: a key which is not an integer (a fractional float is never truncated), or does not fit in
    /// an `i64`, cannot be bound and hence resolves to the default case.
    pub fn resolve<I: ToPrimitive>(key: I) -> Case {
        let case = key::integer(key)
            .ok()
            .and_then(|key| i64::try_from(key).ok())
            .map_or(Case::Default, Case::of);
        tracing::trace!(?case, "resolved switch case");
        case
    }
    /// Get the key this case is bound to, or `None` for the default case
    #[inline]
    pub const fn key(self) -> Option<i64> {
        match self {
            Case::One => Some(1),
            Case::Two => Some(2),
            Case::Default => None,
        }
    }
    /// Get the message emitted by this case
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            Case::One => " SWITCH - 1 ",
            Case::Two => " SWITCH - 2 ",
            Case::Default => " SWITCH - default ",
        }
    }
    /// Execute this case, writing its message to `out`
    pub fn exec_in<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

crate::quick_display!(Case, s, fmt => write!(fmt, "{}", s.message()));
