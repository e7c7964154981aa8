/*!
A sample program exercising every construct, resolving all of its keys during compilation
*/
use crate::control::rec::{Factorial, Loop};
use crate::control::select::Selected;
use crate::control::switch::Switch;
use crate::control::ternary::If;
use crate::control::Exec;
use crate::primitive::nat::N8;
use std::io::{self, Write};
use std::os::raw::c_int;

/// The variant selected when a native integer is four bytes wide
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Then;

/// The variant selected otherwise
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Else;

impl Then {
    /// Announce this variant, and return `42`
    pub fn func<W: Write + ?Sized>(out: &mut W) -> io::Result<i32> {
        write!(out, "Inside THEN")?;
        Ok(42)
    }
}

impl Else {
    /// Announce this variant, and return `0`
    pub fn func<W: Write + ?Sized>(out: &mut W) -> io::Result<i32> {
        write!(out, "Inside ELSE")?;
        Ok(0)
    }
}

/// Whichever of [`Then`] and [`Else`] applies on this target
pub type NativeWidth = Selected<{ std::mem::size_of::<c_int>() == 4 }, Then, Else>;

/// Run the sample program, writing its output to `out`
pub fn run_in<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Factorial of 5 is: {}.", Factorial::<5>::RESULT)?;
    writeln!(out)?;

    writeln!(out, "Loop example:")?;
    Loop::<N8>::exec_in(out)?;
    writeln!(out)?;
    writeln!(out)?;

    writeln!(out, "If Else example")?;
    If::<false>::exec_in(out)?;
    If::<true>::exec_in(out)?;

    writeln!(out, "Switch case example")?;
    Switch::<1>::exec_in(out)?;
    Switch::<2>::exec_in(out)?;
    Switch::<0>::exec_in(out)?;
    Switch::<10>::exec_in(out)?;

    let result = <NativeWidth>::func(out)?;
    write!(out, " - returning: {}", result)
}

/// Run the sample program, writing its output to standard output
pub fn run() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_in(&mut out)?;
    out.flush()
}
