//! Statically partitioned parallel schedule.
//!
//! The region's rows are split once into one contiguous band per worker.
//! Every iteration spawns one task per band and joins them before swapping
//! buffers; the join is the end-of-iteration barrier that makes neighbor
//! reads across band edges see the previous iteration's committed values.
use super::kernel::relax_row;
use super::partition::{group_by_band, row_bands, row_segments_mut};
use super::SolveInputs;
use crate::error::BlendError;
use crate::image::PlanarF32;
use log::debug;
use std::mem;

/// Run the fixed iteration budget over `threads` static row bands.
pub fn solve_banded(
    inputs: &SolveInputs<'_>,
    iterations: usize,
    threads: usize,
) -> Result<PlanarF32, BlendError> {
    let region = inputs.region;
    let bands = row_bands(&region, threads);
    debug!(
        "static schedule: {} bands over {} rows x {} channels",
        bands.len(),
        region.height(),
        inputs.baseline.channels
    );
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| BlendError::InvalidConfig(format!("failed to build worker pool: {e}")))?;

    let mut front = inputs.baseline.clone();
    let mut back = inputs.baseline.clone();
    pool.install(|| {
        for _ in 0..iterations {
            let groups = group_by_band(row_segments_mut(&mut back, &region), &bands);
            let front_ref = &front;
            rayon::scope(|s| {
                for group in groups {
                    s.spawn(move |_| {
                        for seg in group {
                            relax_row(
                                seg.cells,
                                seg.x0,
                                seg.y,
                                seg.channel,
                                front_ref,
                                inputs.guidance,
                                inputs.labels,
                            );
                        }
                    });
                }
            });
            mem::swap(&mut front, &mut back);
        }
    });
    Ok(front)
}
