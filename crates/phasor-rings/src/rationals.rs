//! The field of rational numbers Q.

use num_traits::{One, Zero};
use phasor_integers::Rational;

use crate::traits::{Differentiable, Halvable, Ring};

impl Ring for Rational {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }
}

impl Halvable for Rational {
    fn halve(&self) -> Self {
        self.half()
    }
}

impl Differentiable for Rational {
    fn partial(&self, _symbol: &str) -> Self {
        <Self as Zero>::zero()
    }
}
