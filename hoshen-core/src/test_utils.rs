//! Shared test utilities for `hoshen-core`.

use hoshen_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{codec, image::PixelBuffer, label::Label};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `HOSHEN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Ten by nine occupancy grid with four blobs of sizes 23, 13, 7 and 1.
pub(crate) const WORKED_EXAMPLE: [[u8; 9]; 10] = [
    [0, 1, 0, 0, 0, 0, 0, 1, 1],
    [1, 1, 1, 0, 1, 0, 0, 1, 0],
    [0, 1, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 0, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 0, 0, 1],
    [1, 1, 1, 0, 0, 0, 0, 1, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1],
];

/// Compact labels both engines assign to [`WORKED_EXAMPLE`].
pub(crate) const WORKED_EXAMPLE_LABELS: [[Label; 9]; 10] = [
    [-1, 0, -1, -1, -1, -1, -1, 0, 0],
    [0, 0, 0, -1, 0, -1, -1, 0, -1],
    [-1, 0, -1, -1, 0, -1, -1, 0, -1],
    [-1, 0, 0, 0, 0, -1, -1, 0, -1],
    [-1, -1, -1, 0, -1, -1, -1, 0, -1],
    [-1, 1, -1, 0, 0, 0, 0, 0, -1],
    [1, 1, 1, -1, -1, -1, -1, -1, 2],
    [1, -1, 1, 1, 1, -1, -1, -1, 2],
    [1, 1, 1, -1, -1, -1, -1, 2, 2],
    [1, -1, 1, -1, 3, -1, 2, 2, 2],
];

/// Paints a 0/1 mask as an image: foreground is opaque white, background is
/// opaque black.
pub(crate) fn image_from_mask<R: AsRef<[u8]>>(rows: &[R]) -> PixelBuffer {
    let width = rows.first().map_or(0, |row| row.as_ref().len());
    let mut image = PixelBuffer::new(width, rows.len()).expect("mask dimensions are valid");
    for (y, row) in rows.iter().enumerate() {
        for (x, &cell) in row.as_ref().iter().enumerate() {
            let color = if cell == 0 {
                [0, 0, 0, 255]
            } else {
                [255, 255, 255, 255]
            };
            assert!(image.set_pixel(x, y, color), "mask rows must be rectangular");
        }
    }
    image
}

/// Decodes every pixel of a labeled image into a matrix of labels.
pub(crate) fn label_map(image: &PixelBuffer) -> Vec<Vec<Label>> {
    (0..image.height())
        .map(|y| {
            (0..image.width())
                .map(|x| codec::decode(image.pixel(x, y).expect("coordinate is in bounds")))
                .collect()
        })
        .collect()
}
