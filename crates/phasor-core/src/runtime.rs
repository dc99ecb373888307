//! Process-wide runtime information.

use std::thread;

/// Number of hardware thread contexts, or 0 if detection fails.
///
/// Used as a hint when partitioning bulk term multiplication.
#[must_use]
pub fn hardware_concurrency() -> usize {
    thread::available_parallelism().map_or(0, std::num::NonZeroUsize::get)
}
