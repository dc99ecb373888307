//! # Phasor
//!
//! The term-level kernel of a Poisson series manipulator.
//!
//! A Poisson series is a sum of terms `c · K(x)` where `K` is either a
//! power of a single variable or `cos`/`sin` of an integer linear
//! combination of the variables. This crate ties together:
//!
//! - **Symbols**: ordered, duplicate-free symbol sets keys are interpreted over
//! - **Coefficients**: arbitrary-precision integers and rationals, plus `f64`
//! - **Keys**: [`PlainMonomial`](keys::PlainMonomial) and
//!   [`TrigMonomial`](keys::TrigMonomial) behind one [`MonomialKey`](keys::MonomialKey) trait
//! - **Terms**: product-to-sum multiplication and partial differentiation
//!
//! ## Quick Start
//!
//! ```rust
//! use phasor::prelude::*;
//!
//! let symbols: SymbolSet = ["x", "y"].into_iter().collect();
//!
//! // 3 sin(2x) · 5 sin(x) = -15/2 cos(3x) + 15/2 cos(x)
//! let a = Term::new(Rational::from(3), TrigMonomial::sin([2, 0]));
//! let b = Term::new(Rational::from(5), TrigMonomial::sin([1, 0]));
//! let products = a.multiply(&b, &symbols);
//!
//! assert_eq!(products[0], Term::new(Rational::from_i64(-15, 2), TrigMonomial::cos([3, 0])));
//! assert_eq!(products[1], Term::new(Rational::from_i64(15, 2), TrigMonomial::cos([1, 0])));
//! assert_eq!(products[0].display(&symbols).to_string(), "-15/2*cos(3*x)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use phasor_core as core;
pub use phasor_integers as integers;
pub use phasor_keys as keys;
pub use phasor_rings as rings;
pub use phasor_term as term;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use phasor_core::{Error, Result, Symbol, SymbolSet};
    pub use phasor_integers::{Integer, Rational};
    pub use phasor_keys::{KeyFrom, MonomialKey, PlainMonomial, TrigMonomial};
    pub use phasor_rings::{ConvertTo, Differentiable, Halvable, Ring, SafeCast};
    pub use phasor_term::{multiply_all, ParallelConfig, Term, TermMultiply};
}
