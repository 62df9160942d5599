//! Label and blob types shared by both labeling engines.

/// Identifier assigned to a node or pixel during labeling.
///
/// Non-negative values name a blob. The reserved value [`NULL_LABEL`] marks
/// background and unvisited nodes. The type is signed so the sentinel can
/// take part in the colour codec's `id + 1` arithmetic directly.
pub type Label = i64;

/// Label carried by background and unlabeled nodes.
pub const NULL_LABEL: Label = -1;

/// A connected region reported by the image engine or the blob census.
///
/// # Examples
/// ```
/// use hoshen_core::Blob;
///
/// let blob = Blob::new(0, 23);
/// assert_eq!(blob.id(), 0);
/// assert_eq!(blob.size(), 23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blob {
    id: Label,
    size: u64,
}

impl Blob {
    /// Creates a blob record.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: Label, size: u64) -> Self { Self { id, size } }

    /// Returns the compact blob identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn id(&self) -> Label { self.id }

    /// Returns the number of pixels in the blob.
    #[rustfmt::skip]
    #[must_use]
    pub const fn size(&self) -> u64 { self.size }
}
