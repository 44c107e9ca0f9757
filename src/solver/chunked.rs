//! Dynamically chunked parallel schedule.
//!
//! The region's rows, flattened across channels, are grouped into fixed-size
//! chunks; every iteration the chunks are dispatched to the worker pool,
//! which hands the next unclaimed chunk to whichever worker is idle. Chunk
//! order within an iteration is unspecified (load balancing, not ordering);
//! the parallel iterator's completion is the end-of-iteration barrier.
use super::kernel::relax_row;
use super::partition::{chunk_segments, row_segments_mut};
use super::SolveInputs;
use crate::error::BlendError;
use crate::image::PlanarF32;
use log::debug;
use rayon::prelude::*;
use std::mem;

/// Run the fixed iteration budget over row chunks of `chunk_rows` rows.
pub fn solve_chunked(
    inputs: &SolveInputs<'_>,
    iterations: usize,
    threads: usize,
    chunk_rows: usize,
) -> Result<PlanarF32, BlendError> {
    let region = inputs.region;
    let total_rows = region.height() * inputs.baseline.channels;
    debug!(
        "dynamic schedule: {} chunks of up to {} rows for {} workers",
        (total_rows + chunk_rows - 1) / chunk_rows,
        chunk_rows,
        threads
    );
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| BlendError::InvalidConfig(format!("failed to build worker pool: {e}")))?;

    let mut front = inputs.baseline.clone();
    let mut back = inputs.baseline.clone();
    pool.install(|| {
        for _ in 0..iterations {
            let chunks = chunk_segments(row_segments_mut(&mut back, &region), chunk_rows);
            let front_ref = &front;
            chunks.into_par_iter().for_each(|chunk| {
                for seg in chunk {
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
            mem::swap(&mut front, &mut back);
        }
    });
    Ok(front)
}
