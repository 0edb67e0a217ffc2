//! Reusable elevation and boundary fixtures.
//!
//! Every random fixture takes an explicit seed and draws from a
//! [`ChaCha8Rng`], so a failing test reproduces exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rill_core::BoundaryStatus;
use rill_grid::RasterShape;

/// Uniform random elevations in `[0, 100)`.
pub fn random_terrain(node_count: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..node_count).map(|_| rng.random_range(0.0..100.0)).collect()
}

/// Integer elevations in `0..levels`: lots of exact ties and flats.
pub fn terraced_terrain(node_count: usize, levels: u32, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..node_count)
        .map(|_| f64::from(rng.random_range(0..levels.max(1))))
        .collect()
}

/// A plane rising with row index, plus small noise. Almost every node has
/// a downhill neighbour toward row 0.
pub fn tilted_terrain(shape: &RasterShape, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cols = shape.cols() as usize;
    (0..shape.node_count())
        .map(|i| (i / cols) as f64 * 10.0 + rng.random_range(0.0..1.0))
        .collect()
}

/// Elevation equal to distance from the grid centre: a single central pit.
pub fn bowl_terrain(shape: &RasterShape) -> Vec<f64> {
    let cols = shape.cols() as usize;
    let cr = (shape.rows() as f64 - 1.0) / 2.0;
    let cc = (shape.cols() as f64 - 1.0) / 2.0;
    (0..shape.node_count())
        .map(|i| {
            let r = (i / cols) as f64;
            let c = (i % cols) as f64;
            ((r - cr).powi(2) + (c - cc).powi(2)).sqrt()
        })
        .collect()
}

/// Every node `CORE`.
pub fn all_core(node_count: usize) -> Vec<BoundaryStatus> {
    vec![BoundaryStatus::Core; node_count]
}

/// Perimeter `CLOSED`, interior `CORE`.
pub fn closed_perimeter(shape: &RasterShape) -> Vec<BoundaryStatus> {
    shape
        .default_statuses()
        .into_iter()
        .map(|s| match s {
            BoundaryStatus::FixedValue => BoundaryStatus::Closed,
            other => other,
        })
        .collect()
}

/// A random mix of all four statuses, mostly `CORE`.
pub fn random_statuses(node_count: usize, seed: u64) -> Vec<BoundaryStatus> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..node_count)
        .map(|_| match rng.random_range(0..10u8) {
            0 => BoundaryStatus::FixedValue,
            1 => BoundaryStatus::FixedGradient,
            2 => BoundaryStatus::Closed,
            _ => BoundaryStatus::Core,
        })
        .collect()
}
