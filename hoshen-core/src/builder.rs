//! Builder for configuring [`Labeler`] instances.
//!
//! Validation happens once in [`LabelerBuilder::build`], so a constructed
//! [`Labeler`] always carries a usable configuration.

use std::sync::Arc;

use crate::{Result, codec::MAX_ENCODABLE_LABEL, error::LabelingError, labeler::Labeler};

/// Largest label capacity hint accepted by [`LabelerBuilder::build`].
///
/// Equals the number of labels the colour codec can represent.
pub const MAX_LABEL_CAPACITY: usize = MAX_ENCODABLE_LABEL as usize + 1;

/// Configures and constructs [`Labeler`] instances.
///
/// # Examples
/// ```
/// use hoshen_core::LabelerBuilder;
///
/// let labeler = LabelerBuilder::new()
///     .with_label_capacity(256)
///     .with_name("tiles")
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(labeler.label_capacity(), 256);
/// assert_eq!(labeler.name(), "tiles");
/// ```
#[derive(Debug, Clone)]
pub struct LabelerBuilder {
    label_capacity: usize,
    name: Arc<str>,
}

impl Default for LabelerBuilder {
    fn default() -> Self {
        Self {
            label_capacity: 0,
            name: Arc::from("labeler"),
        }
    }
}

impl LabelerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use hoshen_core::LabelerBuilder;
    ///
    /// let builder = LabelerBuilder::new();
    /// assert_eq!(builder.label_capacity(), 0);
    /// assert_eq!(builder.name(), "labeler");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `capacity` raw labels before the first pass.
    ///
    /// The hint only affects allocation; results are identical for any
    /// accepted value. The image engine never reserves more than one label
    /// per pixel, and a reservation the allocator refuses is skipped.
    #[must_use]
    pub fn with_label_capacity(mut self, capacity: usize) -> Self {
        self.label_capacity = capacity;
        self
    }

    /// Returns the configured label capacity hint.
    #[must_use]
    pub fn label_capacity(&self) -> usize {
        self.label_capacity
    }

    /// Names the labeler in tracing spans.
    ///
    /// # Examples
    /// ```
    /// use hoshen_core::LabelerBuilder;
    ///
    /// let builder = LabelerBuilder::new().with_name("scan");
    /// assert_eq!(builder.name(), "scan");
    /// ```
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the configured name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates the configuration and constructs a [`Labeler`].
    ///
    /// # Errors
    /// Returns [`LabelingError::InvalidLabelCapacity`] when the capacity hint
    /// exceeds [`MAX_LABEL_CAPACITY`].
    ///
    /// # Examples
    /// ```
    /// use hoshen_core::{LabelerBuilder, LabelingError, MAX_LABEL_CAPACITY};
    ///
    /// let err = LabelerBuilder::new()
    ///     .with_label_capacity(usize::MAX)
    ///     .build()
    ///     .expect_err("capacity exceeds the codec range");
    /// assert!(matches!(err, LabelingError::InvalidLabelCapacity { max, .. } if max == MAX_LABEL_CAPACITY));
    /// ```
    pub fn build(self) -> Result<Labeler> {
        if self.label_capacity > MAX_LABEL_CAPACITY {
            return Err(LabelingError::InvalidLabelCapacity {
                requested: self.label_capacity,
                max: MAX_LABEL_CAPACITY,
            });
        }

        Ok(Labeler::new(self.label_capacity, self.name))
    }
}
