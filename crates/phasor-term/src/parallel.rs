//! Bulk term multiplication.
//!
//! Multiplies every term of one list by every term of another, fanning rows
//! out over rayon's work-stealing pool once the product count is large
//! enough to amortize the scheduling.

use phasor_core::{hardware_concurrency, SymbolSet};
use phasor_keys::MonomialKey;
use phasor_rings::Ring;
use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::product::TermMultiply;
use crate::term::Term;

/// Configuration for [`multiply_all`].
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of term pairs before work is spread across threads.
    pub parallel_threshold: usize,
    /// Minimum number of left-hand rows handed to one task.
    pub min_rows_per_task: usize,
}

impl ParallelConfig {
    /// A configuration that never leaves the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            min_rows_per_task: 1,
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        let parallel_threshold = if hardware_concurrency() > 1 {
            4096
        } else {
            usize::MAX
        };
        Self {
            parallel_threshold,
            min_rows_per_task: 1,
        }
    }
}

fn row_products<'a, T: TermMultiply>(
    a: &'a T,
    rhs: &'a [T],
    symbols: &'a SymbolSet,
) -> impl Iterator<Item = T> + 'a {
    rhs.iter().flat_map(move |b| a.multiply(b, symbols))
}

/// Multiplies each term of `lhs` by each term of `rhs`.
///
/// The result lists the products row by row: all products of `lhs[0]`
/// first, in `rhs` order, each pair contributing its terms in the order
/// [`TermMultiply::multiply`] returns them. Ignorable products are dropped.
/// The ordering is the same whether or not the work ran in parallel.
///
/// Both inputs are expected to be compatible with `symbols`.
pub fn multiply_all<Cf, K>(
    lhs: &[Term<Cf, K>],
    rhs: &[Term<Cf, K>],
    symbols: &SymbolSet,
    config: &ParallelConfig,
) -> Vec<Term<Cf, K>>
where
    Cf: Ring + Send + Sync,
    K: MonomialKey + Send + Sync,
    Term<Cf, K>: TermMultiply,
{
    let pairs = lhs.len().saturating_mul(rhs.len());
    let _span = debug_span!("multiply_all", lhs = lhs.len(), rhs = rhs.len()).entered();

    let products: Vec<Term<Cf, K>> = if pairs < config.parallel_threshold {
        lhs.iter()
            .flat_map(|a| row_products(a, rhs, symbols))
            .filter(|t| !t.is_ignorable(symbols))
            .collect()
    } else {
        debug!(pairs, "multiplying in parallel");
        lhs.par_iter()
            .with_min_len(config.min_rows_per_task.max(1))
            .flat_map_iter(|a| row_products(a, rhs, symbols))
            .filter(|t| !t.is_ignorable(symbols))
            .collect()
    };

    debug!(kept = products.len(), "multiply_all done");
    products
}
