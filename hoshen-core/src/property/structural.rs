//! Structural guarantees of a compact labeling.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{Labeler, census::collect_blobs, label::NULL_LABEL};

use super::helpers::{Labeling, label_grid, label_painted};
use super::types::MaskFixture;

/// Checks size accounting, ordering and id density for both engines, and
/// that the census reproduces the image engine's blobs.
pub(super) fn run_structural_invariants_property(fixture: &MaskFixture) -> TestCaseResult {
    let labeler = Labeler::default();
    let grid = label_grid(&labeler, fixture)?;
    let image = label_painted(&labeler, fixture)?;

    check_labeling(fixture, &grid)?;
    check_labeling(fixture, &image.labeling)?;

    for (expected_id, blob) in image.blobs.iter().enumerate() {
        prop_assert_eq!(usize::try_from(blob.id()).ok(), Some(expected_id));
    }
    prop_assert_eq!(collect_blobs(&image.image), Ok(image.blobs.clone()));
    Ok(())
}

fn check_labeling(fixture: &MaskFixture, labeling: &Labeling) -> TestCaseResult {
    let total: u64 = labeling.sizes.iter().sum();
    prop_assert_eq!(total, fixture.foreground_count());
    prop_assert!(
        labeling.sizes.windows(2).all(|pair| pair[0] >= pair[1]),
        "sizes must not increase: {:?}",
        labeling.sizes
    );
    prop_assert!(labeling.sizes.iter().all(|&size| size > 0));

    let mut counts = vec![0_u64; labeling.sizes.len()];
    let cells = fixture.rows.iter().flatten();
    for (&cell, &label) in cells.zip(&labeling.labels) {
        if cell == 0 {
            prop_assert_eq!(label, NULL_LABEL);
            continue;
        }
        let id = usize::try_from(label).ok().filter(|&id| id < counts.len());
        prop_assert!(id.is_some(), "label {} outside 0..{}", label, counts.len());
        if let Some(id) = id {
            counts[id] += 1;
        }
    }
    prop_assert_eq!(&counts, &labeling.sizes);
    Ok(())
}
