//! Runs both engines over a fixture and collects what the properties check.

use proptest::test_runner::TestCaseError;

use crate::{
    Labeler, LabelerBuilder, codec,
    grid::BinaryGrid,
    image::PixelBuffer,
    label::{Blob, Label},
    test_utils::image_from_mask,
};

use super::types::MaskFixture;

/// Row-major labels and blob sizes produced by one engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Labeling {
    pub labels: Vec<Label>,
    pub sizes: Vec<u64>,
}

/// Output of the image engine, kept alongside the labeled buffer.
pub(super) struct ImageLabeling {
    pub labeling: Labeling,
    pub blobs: Vec<Blob>,
    pub image: PixelBuffer,
}

pub(super) fn label_grid(labeler: &Labeler, fixture: &MaskFixture) -> Result<Labeling, TestCaseError> {
    let mut grid = BinaryGrid::from_rows(&fixture.rows).map_err(fail)?;
    let sizes = labeler.label_nodes(&mut grid).map_err(fail)?;
    Ok(Labeling {
        labels: grid.labels().to_vec(),
        sizes,
    })
}

pub(super) fn label_painted(
    labeler: &Labeler,
    fixture: &MaskFixture,
) -> Result<ImageLabeling, TestCaseError> {
    let mut image = image_from_mask(&fixture.rows);
    let blobs = labeler.label_image(&mut image).map_err(fail)?;
    let labels = image.pixels().iter().map(|&pixel| codec::decode(pixel)).collect();
    let sizes = blobs.iter().map(|blob| blob.size()).collect();
    Ok(ImageLabeling {
        labeling: Labeling { labels, sizes },
        blobs,
        image,
    })
}

/// Labeler that pre-reserves one raw label per foreground cell.
pub(super) fn hinted_labeler(fixture: &MaskFixture) -> Result<Labeler, TestCaseError> {
    let capacity = usize::try_from(fixture.foreground_count()).map_err(fail)?;
    LabelerBuilder::new()
        .with_label_capacity(capacity)
        .with_name("property")
        .build()
        .map_err(fail)
}

fn fail(err: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(err.to_string())
}
