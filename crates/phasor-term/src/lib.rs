//! # phasor-term
//!
//! Terms pair a ring coefficient with a monomial key and implement the
//! term-level algebra a sparse series container is built from.
//!
//! This crate provides:
//! - [`Term`]: coefficient × key, with structural equality and hashing
//! - [`TermMultiply`]: plain products (one result) and product-to-sum
//!   trigonometric products (two results)
//! - [`Term::partial`]: differentiation by the product rule
//! - [`multiply_all`]: rayon-parallel multiplication of two term lists
//!
//! ## Reentrancy
//!
//! Every operation is a pure function of its operands and the shared
//! [`SymbolSet`](phasor_core::SymbolSet). Nothing is mutated behind the
//! caller's back, so term pairs can be multiplied from any number of
//! threads with no synchronization beyond collecting the results.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parallel;
pub mod product;
pub mod term;

#[cfg(test)]
mod proptests;

pub use parallel::{multiply_all, ParallelConfig};
pub use product::{product_to_sum_signs, TermMultiply, TermProducts};
pub use term::{Term, TermDisplay};
