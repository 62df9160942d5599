//! Configured entry point for both labeling engines.
//!
//! [`Labeler`] wraps the generic and image engines in tracing spans and
//! applies the allocation hint chosen through [`crate::LabelerBuilder`].

use std::sync::Arc;

use tracing::instrument;

use crate::{
    Result, hoshen_kopelman, image::PixelBuffer, label::Blob, node_source::NodeSource, raster,
};

/// Runs Hoshen–Kopelman labeling over node sources and images.
///
/// # Examples
/// ```
/// use hoshen_core::{BinaryGrid, LabelerBuilder, PixelBuffer};
///
/// let labeler = LabelerBuilder::new().with_name("demo").build()?;
///
/// let mut grid = BinaryGrid::from_rows(&[[1_u8, 0, 1]])?;
/// assert_eq!(labeler.label_nodes(&mut grid)?, vec![1, 1]);
///
/// let mut image = PixelBuffer::new(2, 2)?;
/// assert!(labeler.label_image(&mut image)?.is_empty());
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Labeler {
    label_capacity: usize,
    name: Arc<str>,
}

impl Default for Labeler {
    fn default() -> Self {
        Self::new(0, Arc::from("labeler"))
    }
}

impl Labeler {
    pub(crate) fn new(label_capacity: usize, name: Arc<str>) -> Self {
        Self {
            label_capacity,
            name,
        }
    }

    /// Returns the raw label capacity reserved before each first pass.
    #[rustfmt::skip]
    #[must_use]
    pub fn label_capacity(&self) -> usize { self.label_capacity }

    /// Returns the name recorded on tracing spans.
    #[rustfmt::skip]
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Labels every node of `source` and returns blob sizes indexed by id.
    ///
    /// # Errors
    /// Returns [`crate::LabelingError::InvariantViolation`] when the source
    /// reports a neighbour label that was never assigned.
    #[instrument(
        name = "core.label_nodes",
        err,
        skip(self, source),
        fields(labeler = %self.name, source = %source.name(), capacity = self.label_capacity),
    )]
    pub fn label_nodes<S: NodeSource + ?Sized>(&self, source: &mut S) -> Result<Vec<u64>> {
        hoshen_kopelman::label_nodes(source, self.label_capacity)
    }

    /// Labels `image` in place and returns its blobs ordered by size.
    ///
    /// # Errors
    /// Returns [`crate::LabelingError::InvalidOrigin`] when the buffer does
    /// not start at `(0, 0)`; the pixels are left untouched in that case.
    #[instrument(
        name = "core.label_image",
        err,
        skip(self, image),
        fields(labeler = %self.name, width = image.width(), height = image.height()),
    )]
    pub fn label_image(&self, image: &mut PixelBuffer) -> Result<Vec<Blob>> {
        raster::label_pixels(image, self.label_capacity)
    }
}
