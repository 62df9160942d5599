//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single labeling benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct LabelingBenchParams {
    /// Mask width in pixels.
    pub width: usize,
    /// Mask height in pixels.
    pub height: usize,
    /// Percentage of foreground pixels, `0..=100`.
    pub fill_percent: u8,
}

impl fmt::Display for LabelingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{},p={}", self.width, self.height, self.fill_percent)
    }
}
