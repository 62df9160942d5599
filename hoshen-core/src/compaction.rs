//! Finalization shared by both labeling engines.
//!
//! After the first pass every raw label knows its representative, but sizes
//! are still scattered across the labels that were merged away. Compaction
//! folds them into their roots, ranks the roots by size (largest first) and
//! assigns each one a dense identifier in `0..k`. Merged labels inherit the
//! identifier of their root so the second pass can rewrite any raw label with
//! a single lookup.

use crate::{
    equivalence::Equivalence,
    error::{LabelingError, Result},
    label::{Blob, Label},
};

#[derive(Clone, Debug)]
pub(crate) struct Compaction {
    mapping: Vec<usize>,
    sizes: Vec<u64>,
}

impl Compaction {
    pub(crate) fn finalize(mut equivalence: Equivalence) -> Self {
        let raw_count = equivalence.len();

        // Roots can still change until the first pass has finished, so sizes
        // are only folded here.
        for label in 0..raw_count {
            let root = equivalence.find(label);
            if root != label {
                equivalence.transfer_size(label, root);
            }
        }

        // Stable sort: equal sizes keep creation order.
        let mut ranked: Vec<usize> = (0..raw_count)
            .filter(|&label| equivalence.is_root(label))
            .collect();
        ranked.sort_by(|&left, &right| equivalence.size(right).cmp(&equivalence.size(left)));

        let mut mapping = vec![0; raw_count];
        for (compact, &root) in ranked.iter().enumerate() {
            mapping[root] = compact;
        }
        for label in 0..raw_count {
            if !equivalence.is_root(label) {
                let root = equivalence.find(label);
                mapping[label] = mapping[root];
            }
        }

        let sizes = ranked.iter().map(|&root| equivalence.size(root)).collect();
        Self { mapping, sizes }
    }

    /// Number of raw labels created by the first pass.
    pub(crate) fn raw_label_count(&self) -> usize {
        self.mapping.len()
    }

    /// Number of blobs after compaction.
    pub(crate) fn blob_count(&self) -> usize {
        self.sizes.len()
    }

    /// Maps a raw label to its compact identifier.
    pub(crate) fn compact(&self, raw: Label) -> Result<Label> {
        usize::try_from(raw)
            .ok()
            .and_then(|index| self.mapping.get(index))
            .map(|&compact| to_label(compact))
            .ok_or(LabelingError::InvariantViolation {
                invariant: "second pass must only see labels created by the first pass",
                label: raw,
                bound: self.mapping.len(),
            })
    }

    pub(crate) fn into_sizes(self) -> Vec<u64> {
        self.sizes
    }

    pub(crate) fn into_blobs(self) -> Vec<Blob> {
        self.sizes
            .into_iter()
            .enumerate()
            .map(|(id, size)| Blob::new(to_label(id), size))
            .collect()
    }
}

/// Converts an in-memory index into a label.
///
/// Indices address `Vec`s, whose lengths never exceed `isize::MAX`, so the
/// conversion cannot wrap.
pub(crate) const fn to_label(index: usize) -> Label {
    index as Label
}
