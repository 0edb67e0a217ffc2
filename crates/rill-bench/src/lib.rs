//! Benchmark profiles for the rill flow-routing workspace.
//!
//! - [`reference_profile`]: 100x100 raster (10K nodes), perimeter outlets
//! - [`stress_profile`]: 500x500 raster (250K nodes), perimeter outlets
//! - [`valley_terrain`]: deterministic synthetic terrain with ridges,
//!   valleys, and scattered pits

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rill_core::BoundaryStatus;

/// Elevations and statuses for one benchmark raster.
pub struct Profile {
    /// Raster rows.
    pub rows: u32,
    /// Raster columns.
    pub cols: u32,
    /// One elevation per node.
    pub elevations: Vec<f64>,
    /// One status per node.
    pub statuses: Vec<BoundaryStatus>,
}

/// 100x100 raster (10K nodes).
pub fn reference_profile(seed: u64) -> Profile {
    profile(100, 100, seed)
}

/// 500x500 raster (250K nodes).
pub fn stress_profile(seed: u64) -> Profile {
    profile(500, 500, seed)
}

fn profile(rows: u32, cols: u32, seed: u64) -> Profile {
    let n = rows as usize * cols as usize;
    let statuses = (0..n)
        .map(|i| {
            let (r, c) = ((i / cols as usize) as u32, (i % cols as usize) as u32);
            if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                BoundaryStatus::FixedValue
            } else {
                BoundaryStatus::Core
            }
        })
        .collect();
    Profile {
        rows,
        cols,
        elevations: valley_terrain(rows, cols, seed),
        statuses,
    }
}

/// Deterministic terrain: a valley running along the middle column,
/// sinusoidal ridges across it, and a seed-dependent hash jitter that
/// leaves some closed depressions.
pub fn valley_terrain(rows: u32, cols: u32, seed: u64) -> Vec<f64> {
    let mid = f64::from(cols) / 2.0;
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .map(|(r, c)| {
            let across = (f64::from(c) - mid).abs();
            let ridges = (f64::from(r) * 0.3).sin() * 4.0;
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(u64::from(r).wrapping_mul(1442695040888963407))
                .wrapping_add(u64::from(c));
            let jitter = (h >> 40) as f64 / (1u64 << 24) as f64;
            f64::from(r) * 0.5 + across + ridges + jitter * 2.0
        })
        .collect()
}
