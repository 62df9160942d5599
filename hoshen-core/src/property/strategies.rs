//! Mask generators for labeling property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MaskFixture, MaskShape};

const MIN_SIDE: usize = 1;
const MAX_SIDE: usize = 32;

/// Generates fixtures across every [`MaskShape`], biased towards the
/// critical density where merges are most intricate.
pub(super) fn mask_fixture_strategy() -> impl Strategy<Value = MaskFixture> {
    let shape = prop_oneof![
        1 => Just(MaskShape::Sparse),
        3 => Just(MaskShape::Critical),
        1 => Just(MaskShape::Dense),
        1 => Just(MaskShape::Serpentine),
        1 => Just(MaskShape::Comb),
    ];
    (shape, any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: MaskShape, rng: &mut SmallRng) -> MaskFixture {
    let width = rng.gen_range(MIN_SIDE..=MAX_SIDE);
    let height = rng.gen_range(MIN_SIDE..=MAX_SIDE);
    let rows = match shape {
        MaskShape::Sparse => random_mask(rng, width, height, 0.2),
        MaskShape::Critical => random_mask(rng, width, height, 0.59),
        MaskShape::Dense => random_mask(rng, width, height, 0.85),
        MaskShape::Serpentine => serpentine(width, height),
        MaskShape::Comb => comb(width, height),
    };
    MaskFixture { rows, shape }
}

fn random_mask(rng: &mut SmallRng, width: usize, height: usize, fill: f64) -> Vec<Vec<u8>> {
    (0..height)
        .map(|_| (0..width).map(|_| u8::from(rng.gen_bool(fill))).collect())
        .collect()
}

/// Full even rows joined alternately at the right and left edge.
fn serpentine(width: usize, height: usize) -> Vec<Vec<u8>> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let connector = if y % 4 == 1 { width - 1 } else { 0 };
                    u8::from(y % 2 == 0 || x == connector)
                })
                .collect()
        })
        .collect()
}

/// Even columns filled top to bottom, bridged by the last row.
fn comb(width: usize, height: usize) -> Vec<Vec<u8>> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| u8::from(x % 2 == 0 || y + 1 == height))
                .collect()
        })
        .collect()
}
