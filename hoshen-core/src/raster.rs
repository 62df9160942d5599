//! Raster-scan engine that labels RGBA images in place.
//!
//! A pixel is background when its red, green and blue channels are all zero;
//! alpha is ignored. The first pass scans rows top to bottom, keeping one row
//! of labels for the above neighbour and a single label for the left one, and
//! writes every pixel's raw label into the pixel itself via [`codec`]. The
//! second pass decodes each labeled pixel and re-encodes its compact id.
//!
//! When both neighbours are labeled the left root is linked into the above
//! root. Background pixels leave the first pass as [`codec::EMPTY_COLOR`].

use tracing::{debug, warn};

use crate::{
    codec,
    compaction::{Compaction, to_label},
    equivalence::Equivalence,
    error::Result,
    image::PixelBuffer,
    label::{Blob, NULL_LABEL},
    labeler::Labeler,
};

/// Labels `image` in place and returns its blobs ordered by descending size.
///
/// On success every foreground pixel holds the colour of its blob id and
/// every background pixel is [`codec::EMPTY_COLOR`]. This is
/// [`Labeler::label_image`] with the default configuration.
///
/// # Errors
/// Returns [`crate::LabelingError::InvalidOrigin`] without touching the
/// pixels when the buffer's origin is not `(0, 0)`.
///
/// # Examples
/// ```
/// use hoshen_core::{Blob, PixelBuffer, codec, label_image};
///
/// let mut image = PixelBuffer::new(4, 1)?;
/// image.set_pixel(0, 0, [255, 255, 255, 255]);
/// image.set_pixel(1, 0, [80, 0, 0, 255]);
/// image.set_pixel(3, 0, [0, 0, 9, 0]);
/// let blobs = label_image(&mut image)?;
///
/// assert_eq!(blobs, vec![Blob::new(0, 2), Blob::new(1, 1)]);
/// assert_eq!(image.pixel(1, 0), Some(codec::encode(0)));
/// assert_eq!(image.pixel(2, 0), Some(codec::EMPTY_COLOR));
/// assert_eq!(image.pixel(3, 0), Some(codec::encode(1)));
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
pub fn label_image(image: &mut PixelBuffer) -> Result<Vec<Blob>> {
    Labeler::default().label_image(image)
}

pub(crate) fn label_pixels(image: &mut PixelBuffer, capacity: usize) -> Result<Vec<Blob>> {
    if let Err(err) = image.ensure_zero_origin() {
        warn!(error = %err, "rejecting image with a non-zero origin");
        return Err(err);
    }
    if image.is_empty() {
        debug!(raw_labels = 0, blobs = 0, "image labeling completed");
        return Ok(Vec::new());
    }

    let equivalence = first_pass(image, capacity);
    let compaction = Compaction::finalize(equivalence);
    let raw_labels = compaction.raw_label_count();
    let blobs = compaction.blob_count();

    for pixel in image.pixels_mut() {
        let raw = codec::decode(*pixel);
        if raw == NULL_LABEL {
            continue;
        }
        *pixel = codec::encode(compaction.compact(raw)?);
    }

    debug!(raw_labels, blobs, "image labeling completed");
    Ok(compaction.into_blobs())
}

fn first_pass(image: &mut PixelBuffer, capacity: usize) -> Equivalence {
    let width = image.width();
    // An image never needs more raw labels than it has pixels.
    let mut equivalence = Equivalence::with_capacity(capacity.min(image.pixel_count()));
    let mut above_row: Vec<Option<usize>> = vec![None; width];

    for row in image.pixels_mut().chunks_exact_mut(width) {
        let mut left: Option<usize> = None;
        for (pixel, above) in row.iter_mut().zip(above_row.iter_mut()) {
            let current = if is_background(*pixel) {
                None
            } else {
                let label = match (left, *above) {
                    (None, None) => equivalence.create(0),
                    (Some(left), None) => equivalence.find(left),
                    (None, Some(above)) => equivalence.find(above),
                    (Some(left), Some(above)) => {
                        let left_root = equivalence.find(left);
                        let above_root = equivalence.find(above);
                        equivalence.link(left_root, above_root);
                        equivalence.find(left)
                    }
                };
                equivalence.add_weight(label, 1);
                Some(label)
            };

            *pixel = codec::encode(current.map_or(NULL_LABEL, to_label));
            *above = current;
            left = current;
        }
    }

    equivalence
}

fn is_background(pixel: [u8; 4]) -> bool {
    matches!(pixel, [0, 0, 0, _])
}
