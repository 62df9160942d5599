//! Synthetic benchmark masks.
//!
//! [`SyntheticMask`] holds a seeded random occupancy mask that can be turned
//! into either labeling input: a [`BinaryGrid`] for the node-source engine or
//! a [`PixelBuffer`] for the image engine. Identical configurations always
//! produce identical masks.

mod errors;

pub use errors::SyntheticError;

use hoshen_core::{BinaryGrid, LabelingError, PixelBuffer};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Colour painted for foreground cells.
pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

/// Colour painted for background cells.
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// Configuration for uniformly random masks.
#[derive(Clone, Debug)]
pub struct MaskConfig {
    /// Mask width in cells.
    pub width: usize,
    /// Mask height in cells.
    pub height: usize,
    /// Probability, in percent, that a cell is foreground.
    pub fill_percent: u8,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A row-major 0/1 occupancy mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticMask {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl SyntheticMask {
    /// Generates a mask whose cells are foreground with probability
    /// `fill_percent / 100`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &MaskConfig) -> Result<Self, SyntheticError> {
        if config.width == 0 {
            return Err(SyntheticError::ZeroWidth);
        }
        if config.height == 0 {
            return Err(SyntheticError::ZeroHeight);
        }
        if config.fill_percent > 100 {
            return Err(SyntheticError::InvalidFillPercent {
                percent: config.fill_percent,
            });
        }
        let total = config
            .width
            .checked_mul(config.height)
            .ok_or(SyntheticError::Overflow)?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let cells = (0..total)
            .map(|_| u8::from(rng.gen_range(0..100_u8) < config.fill_percent))
            .collect();

        Ok(Self {
            cells,
            width: config.width,
            height: config.height,
        })
    }

    /// Returns the mask width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the mask height.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of foreground cells.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Builds a [`BinaryGrid`] over the mask.
    ///
    /// # Errors
    /// Propagates [`LabelingError`] from [`BinaryGrid::from_rows`].
    pub fn to_grid(&self) -> Result<BinaryGrid, LabelingError> {
        let rows: Vec<&[u8]> = self.cells.chunks_exact(self.width).collect();
        BinaryGrid::from_rows(&rows)
    }

    /// Paints the mask into an opaque RGBA image.
    ///
    /// # Errors
    /// Propagates [`LabelingError`] from [`PixelBuffer::new`].
    pub fn to_image(&self) -> Result<PixelBuffer, LabelingError> {
        let mut image = PixelBuffer::new(self.width, self.height)?;
        for (pixel, &cell) in image.pixels_mut().iter_mut().zip(&self.cells) {
            *pixel = if cell == 0 { BACKGROUND } else { FOREGROUND };
        }
        Ok(image)
    }
}
