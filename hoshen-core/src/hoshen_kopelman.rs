//! Generic two-pass Hoshen–Kopelman engine over any [`NodeSource`].
//!
//! The first pass visits every node once. A node without labeled neighbours
//! opens a new raw label; otherwise all neighbour roots are linked to the
//! smallest one and the node joins it. After [`Compaction`] has ranked the
//! blobs, the second pass rewrites each stored raw label with its compact
//! identifier.

use tracing::debug;

use crate::{
    compaction::{Compaction, to_label},
    equivalence::Equivalence,
    error::Result,
    label::Label,
    labeler::Labeler,
    node_source::NodeSource,
};

/// Labels every node of `source` and returns blob sizes indexed by blob id.
///
/// Blob ids are dense in `0..sizes.len()` and ordered by descending size.
/// This is [`Labeler::label_nodes`] with the default configuration.
///
/// # Errors
/// Returns [`crate::LabelingError::InvariantViolation`] when the source
/// reports a neighbour label that was never assigned, which means its
/// traversal is not causal.
///
/// # Examples
/// ```
/// use hoshen_core::{BinaryGrid, hoshen_kopelman};
///
/// let mut grid = BinaryGrid::from_rows(&[[1_u8, 1, 0, 1]])?;
/// assert_eq!(hoshen_kopelman(&mut grid)?, vec![2, 1]);
/// # Ok::<(), hoshen_core::LabelingError>(())
/// ```
pub fn hoshen_kopelman<S: NodeSource + ?Sized>(source: &mut S) -> Result<Vec<u64>> {
    Labeler::default().label_nodes(source)
}

pub(crate) fn label_nodes<S: NodeSource + ?Sized>(
    source: &mut S,
    capacity: usize,
) -> Result<Vec<u64>> {
    let equivalence = first_pass(source, capacity)?;
    let compaction = Compaction::finalize(equivalence);
    let raw_labels = compaction.raw_label_count();
    let blobs = compaction.blob_count();

    source.reset();
    while source.advance() {
        let compact = compaction.compact(source.label())?;
        source.set_label(compact);
    }

    debug!(raw_labels, blobs, "node labeling completed");
    Ok(compaction.into_sizes())
}

fn first_pass<S: NodeSource + ?Sized>(source: &mut S, capacity: usize) -> Result<Equivalence> {
    let mut equivalence = Equivalence::with_capacity(capacity);
    let mut neighbors: Vec<Label> = Vec::new();
    let mut roots: Vec<usize> = Vec::new();

    source.reset();
    while source.advance() {
        neighbors.clear();
        source.neighbor_labels(&mut neighbors);
        let weight = source.weight();

        if neighbors.is_empty() {
            let label = equivalence.create(weight);
            source.set_label(to_label(label));
            continue;
        }

        roots.clear();
        for &neighbor in &neighbors {
            roots.push(equivalence.find_label(neighbor)?);
        }
        let target = roots.iter().copied().fold(usize::MAX, usize::min);
        for &root in &roots {
            equivalence.link(root, target);
        }
        // Re-resolve so every neighbour path points straight at the target.
        for &neighbor in &neighbors {
            equivalence.find_label(neighbor)?;
        }

        equivalence.add_weight(target, weight);
        source.set_label(to_label(target));
    }

    Ok(equivalence)
}
