//! Fixture types for labeling property tests.

/// Shape of the generated occupancy mask.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum MaskShape {
    /// Few scattered cells; mostly single-cell blobs.
    Sparse,
    /// Fill probability near the site-percolation threshold, producing
    /// large irregular blobs with many late merges.
    Critical,
    /// Mostly foreground with small holes.
    Dense,
    /// One blob winding back and forth across the grid.
    Serpentine,
    /// Vertical teeth that only join on the last row.
    Comb,
}

/// Occupancy mask together with the shape that produced it.
#[derive(Clone, Debug)]
pub(super) struct MaskFixture {
    /// Rows of 0/1 cells, all of equal width.
    pub rows: Vec<Vec<u8>>,
    /// Shape used during generation.
    pub shape: MaskShape,
}

impl MaskFixture {
    pub(super) fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub(super) fn height(&self) -> usize {
        self.rows.len()
    }

    pub(super) fn foreground_count(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell != 0)
            .count() as u64
    }
}
