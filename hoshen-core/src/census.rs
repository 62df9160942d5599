//! Recounts blob sizes from an image that was already labeled.

use crate::{
    codec,
    compaction::to_label,
    error::{LabelingError, Result},
    image::PixelBuffer,
    label::Blob,
};

/// Counts the pixels of every blob id stored in a label map.
///
/// Entry `i` of the result describes id `i`. Ids missing below the largest
/// id that occurs are reported with size 0, and empty pixels are skipped.
/// The buffer's origin is not inspected.
///
/// # Errors
/// Returns [`LabelingError::InvariantViolation`] when a pixel decodes to an
/// id at or above the pixel count, which no labeling pass can produce.
///
/// # Examples
/// ```
/// use hoshen_core::{Blob, PixelBuffer, codec, collect_blobs};
///
/// let mut map = PixelBuffer::new(4, 1)?;
/// map.set_pixel(0, 0, codec::encode(2));
/// map.set_pixel(1, 0, codec::encode(0));
/// map.set_pixel(2, 0, codec::encode(2));
///
/// assert_eq!(
///     collect_blobs(&map)?,
///     vec![Blob::new(0, 1), Blob::new(1, 0), Blob::new(2, 2)]
/// );
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
#[tracing::instrument(
    name = "core.collect_blobs",
    err,
    skip(image),
    fields(width = image.width(), height = image.height()),
)]
pub fn collect_blobs(image: &PixelBuffer) -> Result<Vec<Blob>> {
    let bound = image.pixel_count();
    let mut sizes: Vec<u64> = Vec::new();

    for &pixel in image.pixels() {
        if codec::is_empty(pixel) {
            continue;
        }
        let label = codec::decode(pixel);
        let id = usize::try_from(label)
            .ok()
            .filter(|&id| id < bound)
            .ok_or(LabelingError::InvariantViolation {
                invariant: "label map ids must stay below the pixel count",
                label,
                bound,
            })?;
        if id >= sizes.len() {
            sizes.resize(id + 1, 0);
        }
        sizes[id] += 1;
    }

    tracing::debug!(blobs = sizes.len(), "census completed");
    Ok(sizes
        .into_iter()
        .enumerate()
        .map(|(id, size)| Blob::new(to_label(id), size))
        .collect())
}
