//! Reference [`NodeSource`] over a binary grid.
//!
//! Cells are visited in raster order, skipping background, and each cell
//! reports its above and left neighbours when those are foreground. That
//! order is causal for 4-connectivity, so the grid can be fed straight into
//! [`crate::hoshen_kopelman`].

use crate::{
    error::{LabelingError, Result},
    label::{Label, NULL_LABEL},
    node_source::NodeSource,
};

/// Binary occupancy grid with an owned label matrix.
///
/// # Examples
/// ```
/// use hoshen_core::{BinaryGrid, NULL_LABEL, hoshen_kopelman};
///
/// let mut grid = BinaryGrid::from_rows(&[[1_u8, 0, 1], [1, 0, 0]])?;
/// let sizes = hoshen_kopelman(&mut grid)?;
/// assert_eq!(sizes, vec![2, 1]);
/// assert_eq!(grid.label_rows(), vec![vec![0, NULL_LABEL, 1], vec![0, NULL_LABEL, NULL_LABEL]]);
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    labels: Vec<Label>,
    cursor: Option<usize>,
}

impl BinaryGrid {
    /// Builds a grid from rows of cells; any non-zero cell is foreground.
    ///
    /// # Errors
    /// Returns [`LabelingError::RaggedGrid`] when the rows differ in width.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LabelingError::RaggedGrid {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend(row.iter().map(|&cell| cell != 0));
        }

        Ok(Self::from_cells(width, rows.len(), cells))
    }

    fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        let labels = vec![NULL_LABEL; cells.len()];
        Self {
            width,
            height,
            cells,
            labels,
            cursor: None,
        }
    }

    /// Returns the width in cells.
    #[rustfmt::skip]
    #[must_use]
    pub fn width(&self) -> usize { self.width }

    /// Returns the height in cells.
    #[rustfmt::skip]
    #[must_use]
    pub fn height(&self) -> usize { self.height }

    /// Returns whether `(x, y)` is a foreground cell.
    #[must_use]
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Counts foreground cells.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns the label matrix in row-major order.
    #[rustfmt::skip]
    #[must_use]
    pub fn labels(&self) -> &[Label] { &self.labels }

    /// Returns the label at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn label_at(&self, x: usize, y: usize) -> Option<Label> {
        self.index(x, y)
            .and_then(|index| self.labels.get(index))
            .copied()
    }

    /// Returns the label matrix split into rows.
    #[must_use]
    pub fn label_rows(&self) -> Vec<Vec<Label>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.labels
            .chunks_exact(self.width)
            .map(<[Label]>::to_vec)
            .collect()
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn foreground_label(&self, index: usize) -> Option<Label> {
        self.cells
            .get(index)
            .copied()
            .filter(|&cell| cell)
            .and_then(|_| self.labels.get(index).copied())
    }
}

impl NodeSource for BinaryGrid {
    fn reset(&mut self) {
        self.cursor = None;
    }

    fn advance(&mut self) -> bool {
        let start = self.cursor.map_or(0, |index| index + 1);
        let next = self
            .cells
            .iter()
            .skip(start)
            .position(|&cell| cell)
            .map(|offset| start + offset);
        match next {
            Some(index) => {
                self.cursor = Some(index);
                true
            }
            None => {
                self.cursor = Some(self.cells.len());
                false
            }
        }
    }

    fn neighbor_labels(&self, out: &mut Vec<Label>) {
        let Some(index) = self.cursor else {
            return;
        };
        if self.width == 0 {
            return;
        }
        if index >= self.width {
            out.extend(self.foreground_label(index - self.width));
        }
        if index % self.width > 0 {
            out.extend(self.foreground_label(index - 1));
        }
    }

    fn label(&self) -> Label {
        self.cursor
            .and_then(|index| self.labels.get(index))
            .copied()
            .unwrap_or(NULL_LABEL)
    }

    fn set_label(&mut self, label: Label) {
        if let Some(slot) = self.cursor.and_then(|index| self.labels.get_mut(index)) {
            *slot = label;
        }
    }

    fn weight(&self) -> u64 {
        1
    }

    fn name(&self) -> &str {
        "binary_grid"
    }
}
