//! Owned RGBA8 pixel buffers.
//!
//! Pixels are stored row-major with four one-byte channels each and no row
//! padding. A buffer also carries the logical coordinate of its first pixel so
//! callers can hand over a region cut from a larger canvas; the labeling engine
//! only accepts buffers whose origin is `(0, 0)`.

use crate::error::{LabelingError, Result};

/// Number of channels per pixel.
pub const CHANNELS: usize = 4;

/// Logical coordinate of a buffer's first pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Origin {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Origin {
    /// Returns `true` for `(0, 0)`.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// Row-major RGBA8 image that the image engine labels in place.
///
/// # Examples
/// ```
/// use hoshen_core::PixelBuffer;
///
/// let mut image = PixelBuffer::new(2, 1)?;
/// image.set_pixel(1, 0, [255, 0, 0, 255]);
/// assert_eq!(image.pixel(0, 0), Some([0, 0, 0, 0]));
/// assert_eq!(image.pixel(1, 0), Some([255, 0, 0, 255]));
/// assert_eq!(image.pixel(2, 0), None);
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    origin: Origin,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA8 bytes.
    ///
    /// # Errors
    /// Returns [`LabelingError::DimensionOverflow`] when the byte length
    /// implied by `width` and `height` is not addressable, and
    /// [`LabelingError::SizeMismatch`] when `data` has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use hoshen_core::{LabelingError, PixelBuffer};
    ///
    /// let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).expect_err("one byte short");
    /// assert_eq!(err, LabelingError::SizeMismatch { expected: 16, actual: 15 });
    /// ```
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(LabelingError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            origin: Origin::default(),
            data,
        })
    }

    /// Creates a buffer where every pixel is background.
    ///
    /// # Errors
    /// Returns [`LabelingError::DimensionOverflow`] when the dimensions are
    /// not addressable.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = byte_len(width, height)?;
        Self::from_raw(width, height, vec![0; len])
    }

    /// Relocates the buffer to a different logical origin.
    #[must_use]
    pub fn with_origin(mut self, x: i64, y: i64) -> Self {
        self.origin = Origin { x, y };
        self
    }

    /// Returns the logical coordinate of the first pixel.
    #[rustfmt::skip]
    #[must_use]
    pub fn origin(&self) -> Origin { self.origin }

    /// Returns the width in pixels.
    #[rustfmt::skip]
    #[must_use]
    pub fn width(&self) -> usize { self.width }

    /// Returns the height in pixels.
    #[rustfmt::skip]
    #[must_use]
    pub fn height(&self) -> usize { self.height }

    /// Returns the raw bytes.
    #[rustfmt::skip]
    #[must_use]
    pub fn data(&self) -> &[u8] { &self.data }

    /// Returns the raw bytes mutably.
    #[rustfmt::skip]
    pub fn data_mut(&mut self) -> &mut [u8] { &mut self.data }

    /// Consumes the buffer and returns its bytes.
    #[rustfmt::skip]
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> { self.data }

    /// Returns `true` when the buffer holds no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the pixel at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        let start = self.offset(x, y)?;
        let bytes = self.data.get(start..start + CHANNELS)?;
        <[u8; 4]>::try_from(bytes).ok()
    }

    /// Returns a mutable view of the pixel at `(x, y)`.
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8; 4]> {
        let start = self.offset(x, y)?;
        let bytes = self.data.get_mut(start..start + CHANNELS)?;
        <&mut [u8; 4]>::try_from(bytes).ok()
    }

    /// Overwrites the pixel at `(x, y)`; returns `false` outside the buffer.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: [u8; 4]) -> bool {
        match self.pixel_mut(x, y) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    /// Returns the pixels in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[[u8; 4]] {
        self.data.as_chunks::<CHANNELS>().0
    }

    /// Returns the pixels in row-major order, mutably.
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        self.data.as_chunks_mut::<CHANNELS>().0
    }

    /// Returns the number of pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub(crate) fn ensure_zero_origin(&self) -> Result<()> {
        if self.origin.is_zero() {
            Ok(())
        } else {
            Err(LabelingError::InvalidOrigin {
                x: self.origin.x,
                y: self.origin.y,
            })
        }
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * CHANNELS)
    }
}

fn byte_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(LabelingError::DimensionOverflow { width, height })
}
