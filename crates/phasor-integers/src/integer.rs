//! Arbitrary precision integers.

use dashu::base::Signed as DashuSigned;
use dashu::integer::IBig;
use num_traits::{CheckedAdd, CheckedSub, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An arbitrary precision integer.
///
/// Used both as a coefficient ring and as an unbounded exponent type, so a
/// monomial never overflows no matter how many times it is multiplied.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implements an owned, owned-by-ref and ref-by-ref binary operator by
/// forwarding to the wrapped `IBig`.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0.$method(rhs.0))
            }
        }

        impl $trait<&Integer> for Integer {
            type Output = Self;

            fn $method(self, rhs: &Integer) -> Self::Output {
                Self(self.0.$method(&rhs.0))
            }
        }

        impl $trait for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Self) -> Self::Output {
                Integer((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

// Unbounded, so these never fail. They let `Integer` stand in wherever a
// fixed-width exponent would need overflow checks.
impl CheckedAdd for Integer {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl CheckedSub for Integer {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self(IBig::from(value))
                }
            }
        )*
    };
}

from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
