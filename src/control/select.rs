/*!
Selection between two arbitrary types with a boolean key.

Unlike a [`ternary`](super::ternary) unit, which is bound to two fixed messages, a selector only decides *which*
of two caller-supplied variants applies, and hands the chosen variant back to the caller to use as it sees fit.
The variants need not share a trait: the caller may use any item of the selected variant, and the other variant
is never instantiated against that use.

```rust
use rain_static::control::select::Selected;

struct Wide;
struct Narrow;
impl Wide { fn width() -> usize { 8 } }
impl Narrow { fn width() -> usize { 4 } }

type Chosen = Selected<{ std::mem::size_of::<usize>() == 8 }, Wide, Narrow>;
assert_eq!(<Chosen>::width(), std::mem::size_of::<usize>());
```
*/
use either::Either;
use std::io::{self, Write};
use std::marker::PhantomData;

/// A selector between `T` and `E` keyed by the boolean `C`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct IfElse<const C: bool, T, E>(PhantomData<(T, E)>);

/// A selector which has been resolved to one of its variants
pub trait Select {
    /// The variant selected when the key is `true`
    type OnTrue;
    /// The variant selected when the key is `false`
    type OnFalse;
    /// The selected variant
    type Result;
    /// Pick the value of the selected variant out of a value of each
    fn pick(on_true: Self::OnTrue, on_false: Self::OnFalse) -> Self::Result;
}

impl<T, E> Select for IfElse<true, T, E> {
    type OnTrue = T;
    type OnFalse = E;
    type Result = T;
    #[inline]
    fn pick(on_true: T, _on_false: E) -> T {
        on_true
    }
}

impl<T, E> Select for IfElse<false, T, E> {
    type OnTrue = T;
    type OnFalse = E;
    type Result = E;
    #[inline]
    fn pick(_on_true: T, on_false: E) -> E {
        on_false
    }
}

/// The variant selected from `T` and `E` by the key `C`
pub type Selected<const C: bool, T, E> = <IfElse<C, T, E> as Select>::Result;

/// A variant exposing a single operation, for selection with a key only known at runtime
pub trait Variant {
    /// The result of invoking this variant
    type Output;
    /// Invoke this variant, writing any output to `out`
    fn invoke(&self, out: &mut dyn Write) -> io::Result<Self::Output>;
}

impl<L, R> Variant for Either<L, R>
where
    L: Variant,
    R: Variant<Output = L::Output>,
{
    type Output = L::Output;
    #[inline]
    fn invoke(&self, out: &mut dyn Write) -> io::Result<L::Output> {
        match self {
            Either::Left(l) => l.invoke(out),
            Either::Right(r) => r.invoke(out),
        }
    }
}

impl<V: Variant + ?Sized> Variant for &V {
    type Output = V::Output;
    #[inline]
    fn invoke(&self, out: &mut dyn Write) -> io::Result<V::Output> {
        (**self).invoke(out)
    }
}

/// Select between two variants by value: `Left(on_true)` if `key` holds, and `Right(on_false)` otherwise.
///
/// The result is itself a [`Variant`] whenever both sides agree on their output.
#[inline]
pub fn select<L, R>(key: bool, on_true: L, on_false: R) -> Either<L, R> {
    tracing::trace!(key, "selecting variant");
    if key {
        Either::Left(on_true)
    } else {
        Either::Right(on_false)
    }
}

/// Select between two variants behind a shared handle
#[inline]
pub fn select_dyn<'a, O>(
    key: bool,
    on_true: &'a dyn Variant<Output = O>,
    on_false: &'a dyn Variant<Output = O>,
) -> &'a dyn Variant<Output = O> {
    tracing::trace!(key, "selecting variant handle");
    if key {
        on_true
    } else {
        on_false
    }
}
