/*!
Control flow primitives

# Overview
This module contains the following primitive elements for describing control flow resolved during compilation
- [`ternary`](ternary) units for control flow keyed by a boolean
- [`select`](select) for choosing between two arbitrary types keyed by a boolean
- [`switch`](switch) units for multi-way control flow keyed by an integer, with a default case
- [`rec`](rec) units for primitive recursion keyed by a natural number: counted loops and factorials

Each construct is a unit type whose behavior is chosen by the compiler from its key: a specific binding if one
exists for that exact key, and otherwise the generic behavior. Every construct also has a runtime twin performing
the same resolution over a key only known while the program runs.
*/
use std::io::{self, Write};

pub mod rec;
pub mod select;
pub mod switch;
pub mod ternary;

/// A unit whose behavior has been fully resolved from its key, and which can be executed against an output sink
pub trait Exec {
    /// Execute this unit, writing its output to `out`
    fn exec_in<W: Write + ?Sized>(out: &mut W) -> io::Result<()>;
    /// Execute this unit, writing its output to standard output
    #[inline]
    fn exec() -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        Self::exec_in(&mut out)
    }
}

/// Execute a unit into a fresh buffer, returning the output as a string
pub fn exec_to_string<E: Exec>() -> io::Result<String> {
    let mut buf = Vec::new();
    E::exec_in(&mut buf)?;
    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
