//! Single-threaded reference schedule.
use super::kernel::relax_row;
use super::SolveInputs;
use crate::image::PlanarF32;
use std::mem;

/// Run the fixed iteration budget with nested channel/row/column loops.
pub fn solve_sequential(inputs: &SolveInputs<'_>, iterations: usize) -> PlanarF32 {
    let region = inputs.region;
    let channels = inputs.baseline.channels;
    let mut front = inputs.baseline.clone();
    let mut back = inputs.baseline.clone();
    for _ in 0..iterations {
        for channel in 0..channels {
            for y in region.y0..=region.y1 {
                let cells = back.row_segment_mut(region.x0, region.x1, y, channel);
                relax_row(
                    cells,
                    region.x0,
                    y,
                    channel,
                    &front,
                    inputs.guidance,
                    inputs.labels,
                );
            }
        }
        mem::swap(&mut front, &mut back);
    }
    front
}
