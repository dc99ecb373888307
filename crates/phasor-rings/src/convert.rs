//! Compile-time conversion table between numeric types.
//!
//! Two capabilities are provided:
//!
//! - [`SafeCast`]: a value-preserving conversion. Converting `300u32` to
//!   `u8` fails with [`ConversionError`] instead of wrapping.
//! - [`ConvertTo`]: a permissive conversion with `as`-like semantics
//!   (e.g. `3.5f64` converts to `3i32`).
//!
//! Whether a conversion exists between two types is decided by the trait
//! system: code that needs one states it as a bound (`E1: SafeCast<E2>`),
//! and a missing conversion is a compile error rather than a runtime check.

use std::any::type_name;

use phasor_integers::{Integer, Rational};
use thiserror::Error;

/// A conversion that could not preserve the value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsafe conversion from {from} to {to}")]
pub struct ConversionError {
    from: &'static str,
    to: &'static str,
}

impl ConversionError {
    /// Creates an error describing a failed `From -> To` conversion.
    #[must_use]
    pub fn new<From: ?Sized, To: ?Sized>() -> Self {
        Self {
            from: type_name::<From>(),
            to: type_name::<To>(),
        }
    }

    /// Name of the source type.
    #[must_use]
    pub fn from_type(&self) -> &'static str {
        self.from
    }

    /// Name of the target type.
    #[must_use]
    pub fn to_type(&self) -> &'static str {
        self.to
    }
}

/// Value-preserving conversion into `To`.
pub trait SafeCast<To> {
    /// Converts `self`, failing if the value is not representable in `To`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the value does not fit.
    fn safe_cast(&self) -> Result<To, ConversionError>;
}

/// Permissive conversion into `To`.
pub trait ConvertTo<To> {
    /// Converts `self`, possibly losing precision.
    fn convert_to(&self) -> To;
}

macro_rules! safe_cast_from {
    ($from:ty => $($to:ty),*) => {
        $(
            impl SafeCast<$to> for $from {
                fn safe_cast(&self) -> Result<$to, ConversionError> {
                    <$to>::try_from(*self).map_err(|_| ConversionError::new::<$from, $to>())
                }
            }
        )*
    };
}

macro_rules! safe_cast_integral {
    ($($from:ty),*) => {
        $(
            safe_cast_from!($from => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

            impl SafeCast<Integer> for $from {
                fn safe_cast(&self) -> Result<Integer, ConversionError> {
                    Ok(Integer::from(*self))
                }
            }

            impl SafeCast<$from> for Integer {
                fn safe_cast(&self) -> Result<$from, ConversionError> {
                    <$from>::try_from(self.as_inner().clone())
                        .map_err(|_| ConversionError::new::<Integer, $from>())
                }
            }
        )*
    };
}

safe_cast_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl SafeCast<Integer> for Integer {
    fn safe_cast(&self) -> Result<Integer, ConversionError> {
        Ok(self.clone())
    }
}

impl SafeCast<Rational> for Rational {
    fn safe_cast(&self) -> Result<Rational, ConversionError> {
        Ok(self.clone())
    }
}

impl SafeCast<Rational> for Integer {
    fn safe_cast(&self) -> Result<Rational, ConversionError> {
        Ok(Rational::from(self.clone()))
    }
}

impl SafeCast<Integer> for Rational {
    fn safe_cast(&self) -> Result<Integer, ConversionError> {
        if self.is_integer() {
            Ok(self.numerator())
        } else {
            Err(ConversionError::new::<Rational, Integer>())
        }
    }
}

macro_rules! convert_as {
    ($from:ty => $($to:ty),*) => {
        $(
            impl ConvertTo<$to> for $from {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn convert_to(&self) -> $to {
                    *self as $to
                }
            }
        )*
    };
}

macro_rules! convert_numeric {
    ($($from:ty),*) => {
        $(
            convert_as!($from => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
        )*
    };
}

convert_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ConvertTo<String> for str {
    fn convert_to(&self) -> String {
        self.to_owned()
    }
}

impl ConvertTo<String> for String {
    fn convert_to(&self) -> String {
        self.clone()
    }
}

macro_rules! convert_integral_exact {
    ($($from:ty),*) => {
        $(
            impl ConvertTo<Integer> for $from {
                fn convert_to(&self) -> Integer {
                    Integer::from(*self)
                }
            }

            impl ConvertTo<Rational> for $from {
                fn convert_to(&self) -> Rational {
                    Rational::from(*self)
                }
            }
        )*
    };
}

convert_integral_exact!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ConvertTo<Rational> for Integer {
    fn convert_to(&self) -> Rational {
        Rational::from(self.clone())
    }
}

impl ConvertTo<Integer> for Integer {
    fn convert_to(&self) -> Integer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_safe_cast<To, From: SafeCast<To>>() -> bool {
        true
    }

    fn has_convert_to<To, From: ConvertTo<To> + ?Sized>() -> bool {
        true
    }

    #[test]
    fn test_integral_safe_cast() {
        assert_eq!(SafeCast::<u8>::safe_cast(&200u32), Ok(200u8));
        assert_eq!(SafeCast::<i64>::safe_cast(&-5i32), Ok(-5i64));

        let err = SafeCast::<u8>::safe_cast(&300u32).unwrap_err();
        assert_eq!(err.from_type(), "u32");
        assert_eq!(err.to_type(), "u8");
        assert_eq!(err.to_string(), "unsafe conversion from u32 to u8");

        assert!(SafeCast::<u32>::safe_cast(&-1i64).is_err());
    }

    #[test]
    fn test_integer_safe_cast() {
        let big = Integer::from(u64::MAX);
        assert!(SafeCast::<i64>::safe_cast(&big).is_err());
        assert_eq!(SafeCast::<u64>::safe_cast(&big), Ok(u64::MAX));
        assert_eq!(SafeCast::<Integer>::safe_cast(&7u32), Ok(Integer::new(7)));
    }

    #[test]
    fn test_rational_safe_cast() {
        assert_eq!(
            SafeCast::<Integer>::safe_cast(&Rational::from_i64(8, 2)),
            Ok(Integer::new(4))
        );
        assert!(SafeCast::<Integer>::safe_cast(&Rational::from_i64(1, 2)).is_err());
    }

    #[test]
    fn test_convert_to() {
        let truncated: i32 = 3.5f64.convert_to();
        assert_eq!(truncated, 3);

        let widened: f64 = (-4i64).convert_to();
        assert!((widened + 4.0).abs() < f64::EPSILON);

        let owned: String = "asdasd".convert_to();
        assert_eq!(owned, "asdasd");

        let exact: Rational = Integer::new(45).convert_to();
        assert_eq!(exact, Rational::from(45));

        let big: Integer = (-7isize).convert_to();
        assert_eq!(big, Integer::new(-7));
        let ratio: Rational = u32::MAX.convert_to();
        assert_eq!(ratio, Rational::from(u32::MAX));
    }

    #[test]
    fn test_conversion_table() {
        assert!(has_safe_cast::<u8, i64>());
        assert!(has_safe_cast::<Integer, usize>());
        assert!(has_safe_cast::<Rational, Integer>());
        assert!(has_convert_to::<f64, u16>());
        assert!(has_convert_to::<String, str>());
        assert!(has_convert_to::<Rational, Integer>());
        assert!(has_convert_to::<Rational, i64>());
        assert!(has_convert_to::<Integer, u32>());
    }
}
