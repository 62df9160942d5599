//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise during benchmark data preparation so
//! that setup functions can propagate failures with `?` instead of using
//! `.expect()`.

use crate::source::SyntheticError;
use hoshen_core::LabelingError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic mask generation failed.
    #[error("synthetic mask generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building a grid or image, or labeling it, failed.
    #[error("labeling failed: {0}")]
    Labeling(#[from] LabelingError),
    /// A pixel count did not fit Criterion's `u64` throughput counter.
    #[error("pixel count {count} does not fit in u64")]
    ThroughputOverflow {
        /// The offending pixel count.
        count: usize,
    },
}
