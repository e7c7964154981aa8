/*!
Miscellaneous utilities and macros used throughout `rain-static`
*/

/// Quickly implement `Display` using a given function
#[macro_export]
macro_rules! quick_display {
    ($t:ty, $s:ident, $fmt:ident => $e:expr) => {
        impl std::fmt::Display for $t {
            fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
                let $s = self;
                let $fmt = fmt;
                $e
            }
        }
    };
}

/// Implement `Debug` for a type which implements `Display`
#[macro_export]
macro_rules! debug_from_display {
    ($t:ty) => {
        impl std::fmt::Debug for $t {
            fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
                std::fmt::Display::fmt(self, fmt)
            }
        }
    };
}

/// Implement `Exec` for a specific binding by writing a fixed value which implements `Display`, followed by a
/// newline
#[macro_export]
macro_rules! quick_exec {
    ($t:ty => $v:expr) => {
        impl $crate::control::Exec for $t {
            #[inline]
            fn exec_in<W: std::io::Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
                writeln!(out, "{}", $v)
            }
        }
    };
}
