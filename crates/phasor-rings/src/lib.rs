//! # phasor-rings
//!
//! Coefficient capabilities for phasor terms.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Halvable`, `Differentiable`
//! - Implementations for `Integer`, `Rational`, `i64` and `f64`
//! - A compile-time conversion table: `SafeCast` and `ConvertTo`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Halvable   (2 is invertible: required by trigonometric products)
//! Differentiable  (partial derivative with respect to a symbol name)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod integers;
pub mod primitives;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use convert::{ConversionError, ConvertTo, SafeCast};
pub use phasor_integers::{Integer, Rational};
pub use traits::{Differentiable, Halvable, Ring};
