/*!
Conversion of runtime values into keys.

A compile-time key is a const generic parameter or a type-level natural, and is checked by the
compiler. Runtime twins take their keys through the functions in this module instead, which make
the precondition explicit.
*/
use crate::Error;
use num::{BigInt, FromPrimitive, ToPrimitive};
use std::convert::TryFrom;

/// Read a value as an integer key.
///
/// Fractional and non-finite values are rejected rather than truncated, and integers which do not fit an `i128`
/// are out of range.
pub fn integer<I: ToPrimitive>(key: I) -> Result<i128, Error> {
    // Every primitive integer converts to an integral f64, so only floats can fail here
    match key.to_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 => {}
        _ => return Err(Error::NotAnInteger),
    }
    key.to_i128().ok_or_else(|| Error::KeyOutOfRange(wide(&key)))
}

/// Widen an integral key which does not fit an `i128`
fn wide<I: ToPrimitive>(key: &I) -> BigInt {
    key.to_u128()
        .map(BigInt::from)
        .or_else(|| key.to_f64().and_then(BigInt::from_f64))
        .unwrap_or_default()
}

/// Read a value as a non-negative key, such as a loop depth or factorial argument.
pub fn natural<I: ToPrimitive>(key: I) -> Result<u32, Error> {
    let key = integer(key)?;
    if key < 0 {
        return Err(Error::NegativeKey(key));
    }
    u32::try_from(key).map_err(|_| Error::KeyOutOfRange(key.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn natural_keys_are_checked() {
        assert_eq!(natural(0u8), Ok(0));
        assert_eq!(natural(8i64), Ok(8));
        assert_eq!(natural(3.0f64), Ok(3));
        assert_eq!(natural(-1i32), Err(Error::NegativeKey(-1)));
        assert_eq!(natural(i64::MIN), Err(Error::NegativeKey(i64::MIN as i128)));
        assert_eq!(
            natural(1u64 << 40),
            Err(Error::KeyOutOfRange(BigInt::from(1u64 << 40)))
        );
    }

    #[test]
    fn fractional_keys_are_not_truncated() {
        assert_eq!(integer(2.7f64), Err(Error::NotAnInteger));
        assert_eq!(integer(-0.5f32), Err(Error::NotAnInteger));
        assert_eq!(natural(-0.5f64), Err(Error::NotAnInteger));
        assert_eq!(natural(5.9f64), Err(Error::NotAnInteger));
        assert_eq!(integer(std::f64::NAN), Err(Error::NotAnInteger));
        assert_eq!(integer(std::f64::INFINITY), Err(Error::NotAnInteger));
        assert_eq!(integer(-2.0f64), Ok(-2));
    }

    #[test]
    fn wide_integers_are_out_of_range() {
        assert_eq!(integer(-7i8), Ok(-7));
        assert_eq!(integer(i128::MIN), Ok(i128::MIN));
        assert_eq!(
            integer(u128::MAX),
            Err(Error::KeyOutOfRange(BigInt::from(u128::MAX)))
        );
        assert_eq!(
            integer(1e40f64),
            Err(Error::KeyOutOfRange(BigInt::from_f64(1e40).unwrap()))
        );
        assert_eq!(natural(u128::MAX), Err(Error::KeyOutOfRange(BigInt::from(u128::MAX))));
    }
}
