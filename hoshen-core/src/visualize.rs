//! Paints the largest blobs of a label map with a fixed palette.

use crate::{codec, error::Result, image::PixelBuffer, label::Label};

/// Colours for blob ids `0..PALETTE.len()`: red, green, blue, yellow and
/// magenta, all opaque.
pub const PALETTE: [[u8; 4]; 5] = [
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
    [255, 0, 255, 255],
];

/// Colour for blob ids past the end of [`PALETTE`].
pub const FALLBACK_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Returns the display colour of a blob id.
#[must_use]
pub fn palette_color(id: Label) -> [u8; 4] {
    usize::try_from(id)
        .ok()
        .and_then(|index| PALETTE.get(index))
        .copied()
        .unwrap_or(FALLBACK_COLOR)
}

/// Replaces every labeled pixel of a label map with its display colour.
///
/// Empty pixels are left untouched.
///
/// # Errors
/// Returns [`crate::LabelingError::InvalidOrigin`] without touching the
/// pixels when the buffer's origin is not `(0, 0)`.
///
/// # Examples
/// ```
/// use hoshen_core::{PALETTE, PixelBuffer, codec, visualize};
///
/// let mut map = PixelBuffer::new(2, 1)?;
/// map.set_pixel(1, 0, codec::encode(0));
/// visualize(&mut map)?;
///
/// assert_eq!(map.pixel(0, 0), Some(codec::EMPTY_COLOR));
/// assert_eq!(map.pixel(1, 0), Some(PALETTE[0]));
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
#[tracing::instrument(
    name = "core.visualize",
    err,
    skip(image),
    fields(width = image.width(), height = image.height()),
)]
pub fn visualize(image: &mut PixelBuffer) -> Result<()> {
    image.ensure_zero_origin()?;
    for pixel in image.pixels_mut() {
        if !codec::is_empty(*pixel) {
            *pixel = palette_color(codec::decode(*pixel));
        }
    }
    Ok(())
}
