/*!
Conditional units, selecting between two fixed behaviors with a boolean key
*/
use crate::quick_exec;
use std::io::{self, Write};

/// A conditional unit keyed by the boolean `C`.
///
/// Both `If<true>` and `If<false>` are specific bindings: the boolean domain is closed, so there is no generic
/// behavior to fall back on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct If<const C: bool>;

impl<const C: bool> If<C> {
    /// The branch this unit resolves to
    pub const BRANCH: Branch = Branch::of(C);
}

quick_exec!(If<true> => Branch::True);
quick_exec!(If<false> => Branch::False);

/// A branch of a conditional, resolved from a boolean only known at runtime
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Branch {
    /// The branch taken when the key is `true`
    True,
    /// The branch taken when the key is `false`
    False,
}

impl Branch {
    /// Get the branch for a given key
    #[inline]
    pub const fn of(key: bool) -> Branch {
        if key {
            Branch::True
        } else {
            Branch::False
        }
    }
    /// Get the key this branch is bound to
    #[inline]
    pub const fn key(self) -> bool {
        matches!(self, Branch::True)
    }
    /// Get the message emitted by this branch
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            Branch::True => "Statement is true",
            Branch::False => "Statement is false",
        }
    }
    /// Execute this branch, writing its message to `out`
    pub fn exec_in<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        tracing::trace!(key = self.key(), "executing conditional branch");
        writeln!(out, "{}", self)
    }
}

impl From<bool> for Branch {
    #[inline]
    fn from(key: bool) -> Branch {
        Branch::of(key)
    }
}

crate::quick_display!(Branch, s, fmt => write!(fmt, "{}", s.message()));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::exec_to_string;
    use pretty_assertions::assert_eq;

    #[test]
    fn conditional_units_emit_distinct_messages() {
        let high = exec_to_string::<If<true>>().unwrap();
        let low = exec_to_string::<If<false>>().unwrap();
        assert_eq!(high, "Statement is true\n");
        assert_eq!(low, "Statement is false\n");
        assert!(!high.contains("false"));
        assert!(!low.contains("true"));
    }

    #[test]
    fn conditional_units_agree_with_runtime_branches() {
        assert_eq!(If::<true>::BRANCH, Branch::from(true));
        assert_eq!(If::<false>::BRANCH, Branch::from(false));
        for &key in &[true, false] {
            let mut buf = Vec::new();
            Branch::from(key).exec_in(&mut buf).unwrap();
            let expected = if key {
                exec_to_string::<If<true>>()
            } else {
                exec_to_string::<If<false>>()
            };
            assert_eq!(String::from_utf8(buf).unwrap(), expected.unwrap());
            assert_eq!(Branch::from(key).key(), key);
        }
    }

    #[test]
    fn conditional_resolution_is_idempotent() {
        let first = exec_to_string::<If<false>>().unwrap();
        let second = exec_to_string::<If<false>>().unwrap();
        assert_eq!(first, second);
    }
}
