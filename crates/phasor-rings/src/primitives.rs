//! Machine number coefficients.
//!
//! `i64` is an exact (overflowing) ring; `f64` is an approximate field used
//! for numerical work and for checking identities by evaluation.

use crate::traits::{Differentiable, Halvable, Ring};

impl Ring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }
}

impl Differentiable for i64 {
    fn partial(&self, _symbol: &str) -> Self {
        0
    }
}

impl Ring for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_one(&self) -> bool {
        *self == 1.0
    }
}

impl Halvable for f64 {
    fn halve(&self) -> Self {
        self / 2.0
    }
}

impl Differentiable for f64 {
    fn partial(&self, _symbol: &str) -> Self {
        0.0
    }
}
