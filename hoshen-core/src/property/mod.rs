//! Property-based tests for both labeling engines.
//!
//! Random occupancy masks are labeled by the generic engine over a
//! [`crate::BinaryGrid`] and by the image engine over a painted
//! [`crate::PixelBuffer`]. Both must reproduce the partition found by a
//! breadth-first flood fill and honour the structural guarantees of the
//! compact labeling (dense ids ordered by descending size).

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
