//! Node source abstraction consumed by the generic labeling engine.

use crate::label::Label;

/// A container of nodes that can be traversed and labeled.
///
/// The traversal must be causal: whenever [`NodeSource::neighbor_labels`]
/// reports a neighbour, that neighbour has already been visited (and
/// therefore labeled) during the current pass. Raster order over a grid,
/// reporting only the above and left neighbours, satisfies this. Reporting a
/// label that was never assigned makes the engine fail with
/// [`crate::LabelingError::InvariantViolation`].
///
/// # Examples
/// ```
/// use hoshen_core::{Label, NULL_LABEL, NodeSource, hoshen_kopelman};
///
/// /// A path graph where every node touches its predecessor.
/// struct Path {
///     labels: Vec<Label>,
///     cursor: Option<usize>,
/// }
///
/// impl NodeSource for Path {
///     fn reset(&mut self) { self.cursor = None; }
///     fn advance(&mut self) -> bool {
///         let next = self.cursor.map_or(0, |index| index + 1);
///         self.cursor = Some(next);
///         next < self.labels.len()
///     }
///     fn neighbor_labels(&self, out: &mut Vec<Label>) {
///         if let Some(index) = self.cursor.filter(|&index| index > 0) {
///             out.push(self.labels[index - 1]);
///         }
///     }
///     fn label(&self) -> Label { self.cursor.map_or(NULL_LABEL, |index| self.labels[index]) }
///     fn set_label(&mut self, label: Label) {
///         if let Some(index) = self.cursor { self.labels[index] = label; }
///     }
///     fn weight(&self) -> u64 { 1 }
/// }
///
/// let mut path = Path { labels: vec![NULL_LABEL; 4], cursor: None };
/// let sizes = hoshen_kopelman(&mut path)?;
/// assert_eq!(sizes, vec![4]);
/// assert_eq!(path.labels, vec![0; 4]);
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
///
/// Nodes of weight zero still form blobs. Such blobs rank last, so the
/// returned sizes can end in zeros:
///
/// ```
/// use hoshen_core::{Label, NULL_LABEL, NodeSource, hoshen_kopelman};
///
/// /// Isolated nodes with explicit weights.
/// struct Islands {
///     weights: Vec<u64>,
///     labels: Vec<Label>,
///     cursor: Option<usize>,
/// }
///
/// impl NodeSource for Islands {
///     fn reset(&mut self) { self.cursor = None; }
///     fn advance(&mut self) -> bool {
///         let next = self.cursor.map_or(0, |index| index + 1);
///         self.cursor = Some(next);
///         next < self.labels.len()
///     }
///     fn neighbor_labels(&self, _out: &mut Vec<Label>) {}
///     fn label(&self) -> Label { self.cursor.map_or(NULL_LABEL, |index| self.labels[index]) }
///     fn set_label(&mut self, label: Label) {
///         if let Some(index) = self.cursor { self.labels[index] = label; }
///     }
///     fn weight(&self) -> u64 { self.cursor.map_or(0, |index| self.weights[index]) }
/// }
///
/// let mut islands = Islands {
///     weights: vec![0, 3, 0],
///     labels: vec![NULL_LABEL; 3],
///     cursor: None,
/// };
/// assert_eq!(hoshen_kopelman(&mut islands)?, vec![3, 0, 0]);
/// assert_eq!(islands.labels[1], 0);
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
pub trait NodeSource {
    /// Rewinds the traversal so the next [`NodeSource::advance`] visits the
    /// first node again.
    fn reset(&mut self);

    /// Moves to the next node to label, returning `false` once the traversal
    /// is exhausted.
    fn advance(&mut self) -> bool;

    /// Appends the labels of the current node's already visited neighbours to
    /// `out`.
    ///
    /// The engine clears `out` before each call and reuses it across nodes.
    fn neighbor_labels(&self, out: &mut Vec<Label>);

    /// Returns the label of the current node.
    fn label(&self) -> Label;

    /// Stores a label on the current node.
    fn set_label(&mut self, label: Label);

    /// Returns the current node's contribution to its blob's size.
    ///
    /// Blob sizes saturate at `u64::MAX`. A weight of zero still opens a
    /// blob; see the zero-weight example above.
    fn weight(&self) -> u64;

    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str {
        "node_source"
    }
}
