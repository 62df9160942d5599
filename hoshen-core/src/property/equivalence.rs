//! Both engines must reproduce the flood-fill partition.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{Labeler, label::NULL_LABEL};

use super::helpers::{Labeling, hinted_labeler, label_grid, label_painted};
use super::oracle::{FloodFill, flood_fill};
use super::types::MaskFixture;

/// Checks that the grid and image engines induce the flood-fill partition
/// and report its sizes in descending order.
pub(super) fn run_partition_equivalence_property(fixture: &MaskFixture) -> TestCaseResult {
    let oracle = flood_fill(&fixture.rows);
    let labeler = Labeler::default();
    let grid = label_grid(&labeler, fixture)?;
    let image = label_painted(&labeler, fixture)?;

    assert_same_partition(&oracle, &grid)?;
    assert_same_partition(&oracle, &image.labeling)?;

    let mut expected = oracle.sizes.clone();
    expected.sort_unstable_by(|left, right| right.cmp(left));
    prop_assert_eq!(&grid.sizes, &expected, "shape {:?}", fixture.shape);
    prop_assert_eq!(&image.labeling.sizes, &expected, "shape {:?}", fixture.shape);
    Ok(())
}

/// Checks that a capacity hint leaves both engines' output unchanged.
pub(super) fn run_capacity_hint_property(fixture: &MaskFixture) -> TestCaseResult {
    let plain = Labeler::default();
    let hinted = hinted_labeler(fixture)?;

    prop_assert_eq!(label_grid(&plain, fixture)?, label_grid(&hinted, fixture)?);
    prop_assert_eq!(
        label_painted(&plain, fixture)?.labeling,
        label_painted(&hinted, fixture)?.labeling
    );
    Ok(())
}

fn assert_same_partition(oracle: &FloodFill, labeling: &Labeling) -> TestCaseResult {
    prop_assert_eq!(oracle.components.len(), labeling.labels.len());

    let mut to_label = HashMap::new();
    let mut to_component = HashMap::new();
    for (cell, (&component, &label)) in oracle.components.iter().zip(&labeling.labels).enumerate() {
        match component {
            None => {
                prop_assert_eq!(label, NULL_LABEL, "background cell {} was labeled", cell);
            }
            Some(component) => {
                let known_label = *to_label.entry(component).or_insert(label);
                let known_component = *to_component.entry(label).or_insert(component);
                prop_assert_eq!(known_label, label, "component {} split at cell {}", component, cell);
                prop_assert_eq!(
                    known_component,
                    component,
                    "label {} merges two components at cell {}",
                    label,
                    cell
                );
            }
        }
    }
    Ok(())
}
