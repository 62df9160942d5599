//! Union-find (disjoint set) over raw labels created during the first pass.
//!
//! Both labeling engines allocate raw labels sequentially and record which of
//! them belong to the same blob. Each raw label also owns a size record that
//! accumulates the weight of the nodes assigned to it directly; the records
//! are only meaningful once [`crate::compaction::Compaction`] has folded them
//! into their roots.
//!
//! The resolver never picks a merge direction itself. The generic engine links
//! every neighbour root to the smallest one while the image engine links the
//! left root into the above root, so [`Equivalence::link`] takes an explicit
//! child and parent.

use crate::{
    error::{LabelingError, Result},
    label::Label,
};

#[derive(Clone, Debug, Default)]
pub(crate) struct Equivalence {
    parents: Vec<usize>,
    sizes: Vec<u64>,
}

impl Equivalence {
    /// Reserves room for `capacity` raw labels.
    ///
    /// The capacity is only a hint: when the allocator cannot satisfy it the
    /// resolver starts empty and grows on demand.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut equivalence = Self::default();
        if equivalence.parents.try_reserve_exact(capacity).is_err()
            || equivalence.sizes.try_reserve_exact(capacity).is_err()
        {
            return Self::default();
        }
        equivalence
    }

    /// Number of raw labels allocated so far.
    pub(crate) fn len(&self) -> usize {
        self.parents.len()
    }

    /// Allocates the next sequential raw label as its own root.
    pub(crate) fn create(&mut self, weight: u64) -> usize {
        let label = self.parents.len();
        self.parents.push(label);
        self.sizes.push(weight);
        label
    }

    /// Resolves a caller-supplied label to its root.
    ///
    /// Labels that were never allocated, including [`crate::NULL_LABEL`],
    /// yield [`LabelingError::InvariantViolation`].
    pub(crate) fn find_label(&mut self, label: Label) -> Result<usize> {
        let index = self.index_of(label, "label must be allocated before it is resolved")?;
        Ok(self.find(index))
    }

    /// Resolves an allocated raw label to its root, compressing the path.
    pub(crate) fn find(&mut self, label: usize) -> usize {
        let mut root = label;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut node = label;
        while self.parents[node] != node {
            let parent = self.parents[node];
            self.parents[node] = root;
            node = parent;
        }

        root
    }

    /// Makes `parent_root` the representative of `child_root`'s class.
    pub(crate) fn link(&mut self, child_root: usize, parent_root: usize) {
        self.parents[child_root] = parent_root;
    }

    /// Adds `weight` to the size record of `label`, saturating at `u64::MAX`.
    pub(crate) fn add_weight(&mut self, label: usize, weight: u64) {
        self.sizes[label] = self.sizes[label].saturating_add(weight);
    }

    pub(crate) fn is_root(&self, label: usize) -> bool {
        self.parents[label] == label
    }

    pub(crate) fn size(&self, label: usize) -> u64 {
        self.sizes[label]
    }

    /// Moves the size of `label` onto `root`, leaving `label` empty.
    pub(crate) fn transfer_size(&mut self, label: usize, root: usize) {
        let size = std::mem::take(&mut self.sizes[label]);
        self.add_weight(root, size);
    }

    fn index_of(&self, label: Label, invariant: &'static str) -> Result<usize> {
        usize::try_from(label)
            .ok()
            .filter(|&index| index < self.parents.len())
            .ok_or(LabelingError::InvariantViolation {
                invariant,
                label,
                bound: self.parents.len(),
            })
    }
}
