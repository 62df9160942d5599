//! Error types for the Hoshen core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::label::Label;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while building inputs for, or running, a labeling pass.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LabelingError {
    /// The pixel buffer does not start at the logical origin `(0, 0)`.
    #[error("image origin must be (0, 0) but is ({x}, {y})")]
    InvalidOrigin {
        /// Horizontal coordinate of the buffer's first pixel.
        x: i64,
        /// Vertical coordinate of the buffer's first pixel.
        y: i64,
    },
    /// A label reported by the caller, or read back from the buffer, fell
    /// outside the range allocated during the first pass.
    ///
    /// This signals a broken contract, typically a [`crate::NodeSource`]
    /// that reports a neighbour it has not visited yet.
    #[error("labeling invariant violated: {invariant} (label {label}, bound {bound})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The offending label.
        label: Label,
        /// Number of labels allocated when the violation was detected.
        bound: usize,
    },
    /// Pixel data length does not match `width * height * 4`.
    #[error("pixel data has length {actual} but {expected} bytes were expected")]
    SizeMismatch {
        /// Byte length implied by the requested dimensions.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },
    /// The requested dimensions overflow the host pointer width.
    #[error("image dimensions {width}x{height} overflow the addressable size")]
    DimensionOverflow {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// Grid rows passed to [`crate::BinaryGrid`] have different widths.
    #[error("grid row {row} has width {actual} but {expected} was expected")]
    RaggedGrid {
        /// Index of the first offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// The label capacity hint exceeds the encodable label space.
    #[error("label capacity {requested} exceeds the maximum of {max}")]
    InvalidLabelCapacity {
        /// Capacity requested by the caller.
        requested: usize,
        /// Largest accepted capacity.
        max: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`LabelingError`] variants.
    enum LabelingErrorCode for LabelingError {
        /// The pixel buffer does not start at the logical origin.
        InvalidOrigin => InvalidOrigin { .. } => "HOSHEN_INVALID_ORIGIN",
        /// A label fell outside the allocated range.
        InvariantViolation => InvariantViolation { .. } => "HOSHEN_INVARIANT_VIOLATION",
        /// Pixel data length does not match the dimensions.
        SizeMismatch => SizeMismatch { .. } => "HOSHEN_SIZE_MISMATCH",
        /// The requested dimensions overflow the addressable size.
        DimensionOverflow => DimensionOverflow { .. } => "HOSHEN_DIMENSION_OVERFLOW",
        /// Grid rows have different widths.
        RaggedGrid => RaggedGrid { .. } => "HOSHEN_RAGGED_GRID",
        /// The label capacity hint is too large.
        InvalidLabelCapacity => InvalidLabelCapacity { .. } => "HOSHEN_INVALID_LABEL_CAPACITY",
    }
}

impl LabelingError {
    /// Returns `true` when the error reports a broken caller contract rather
    /// than invalid input.
    ///
    /// # Examples
    /// ```
    /// use hoshen_core::LabelingError;
    ///
    /// let err = LabelingError::InvalidOrigin { x: 1, y: 0 };
    /// assert!(!err.is_contract_violation());
    /// ```
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LabelingError>;
