//! Error types for synthetic mask generation.

/// Errors that may occur while preparing benchmark masks.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested width was zero.
    #[error("mask width must be greater than zero")]
    ZeroWidth,
    /// The requested height was zero.
    #[error("mask height must be greater than zero")]
    ZeroHeight,
    /// The requested `width * height` overflowed `usize`.
    #[error("width * height overflows usize")]
    Overflow,
    /// The fill percentage was above 100.
    #[error("fill percentage must be at most 100 (got {percent})")]
    InvalidFillPercent {
        /// The rejected percentage.
        percent: u8,
    },
}
