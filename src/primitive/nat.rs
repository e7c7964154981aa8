/*!
Type-level natural numbers.

A natural is either [`Zero`] or the successor [`Succ<N>`](Succ) of another natural, so every natural is reached
from zero in finitely many steps and there is no way to write a negative one. Constructs keyed by a `Nat` can
therefore recurse on it with the guarantee that the compiler reaches the `Zero` base case.
*/
use std::marker::PhantomData;

/// A natural number encoded as a type
pub trait Nat {
    /// The value of this natural
    const VALUE: u32;
    /// The factorial of this natural, computed by recursion on its predecessor.
    ///
    /// Referencing this constant for a natural whose factorial overflows a `u128` is a build failure.
    const FACTORIAL: u128;
}

/// The natural number zero
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Zero;

/// The successor of the natural number `N`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Succ<N>(PhantomData<N>);

impl Nat for Zero {
    const VALUE: u32 = 0;
    const FACTORIAL: u128 = 1;
}

impl<N: Nat> Nat for Succ<N> {
    const VALUE: u32 = N::VALUE + 1;
    const FACTORIAL: u128 = (N::VALUE as u128 + 1) * N::FACTORIAL;
}

macro_rules! nat_aliases {
    ($zero:ident $(, $n:ident = $p:ident)*) => {
        #[doc = "The natural number 0"]
        pub type $zero = Zero;
        $(
            #[doc = concat!("The natural number ", stringify!($n), ", as the successor of ", stringify!($p))]
            pub type $n = Succ<$p>;
        )*
    };
}

nat_aliases! {
    N0,
    N1 = N0, N2 = N1, N3 = N2, N4 = N3, N5 = N4, N6 = N5, N7 = N6, N8 = N7,
    N9 = N8, N10 = N9, N11 = N10, N12 = N11, N13 = N12, N14 = N13, N15 = N14, N16 = N15,
    N17 = N16, N18 = N17, N19 = N18, N20 = N19, N21 = N20, N22 = N21, N23 = N22, N24 = N23,
    N25 = N24, N26 = N25, N27 = N26, N28 = N27, N29 = N28, N30 = N29, N31 = N30, N32 = N31
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aliases_count_up_from_zero() {
        assert_eq!(N0::VALUE, 0);
        assert_eq!(N1::VALUE, 1);
        assert_eq!(N8::VALUE, 8);
        assert_eq!(N32::VALUE, 32);
        assert_eq!(<Succ<Succ<Zero>>>::VALUE, N2::VALUE);
    }

    #[test]
    fn type_level_factorial() {
        assert_eq!(N0::FACTORIAL, 1);
        assert_eq!(N1::FACTORIAL, 1);
        assert_eq!(N5::FACTORIAL, 120);
        assert_eq!(N10::FACTORIAL, 3_628_800);
        assert_eq!(N32::FACTORIAL, N31::FACTORIAL * 32);
    }
}
