//! Comparison run across the three scheduling variants.
//!
//! Thin consumer of the solver's public contract: solves the same prepared
//! context once per schedule, times each solve (image I/O and preparation
//! excluded) and reports the speedup over the sequential baseline.
use super::timing::TimingBreakdown;
use crate::blend::{BlendContext, Schedule};
use crate::error::BlendError;
use crate::image::PlanarF32;
use crate::mask::Region;
use serde::Serialize;
use std::time::Instant;

/// One solved schedule with its wall-clock time.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantReport {
    pub schedule: String,
    pub elapsed_ms: f64,
    /// `sequential_ms / elapsed_ms`; 1.0 for the sequential baseline.
    pub speedup: f64,
}

/// Serializable summary of a full comparison run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub region: Option<Region>,
    pub iterations: usize,
    pub threads: usize,
    pub chunk_rows: usize,
    pub variants: Vec<VariantReport>,
    pub timing: TimingBreakdown,
}

/// Outputs and report of one comparison run.
pub struct ComparisonRun {
    /// One output buffer per schedule, in `Schedule::ALL` order.
    pub outputs: Vec<(Schedule, PlanarF32)>,
    pub report: ComparisonReport,
}

/// Solve the prepared context once per schedule and time each solve.
pub fn run_comparison(ctx: &BlendContext) -> Result<ComparisonRun, BlendError> {
    let mut outputs = Vec::with_capacity(Schedule::ALL.len());
    let mut timing = TimingBreakdown::default();
    for schedule in Schedule::ALL {
        let start = Instant::now();
        let out = ctx.solve(schedule)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        timing.push(schedule.label(), elapsed_ms);
        outputs.push((schedule, out));
    }

    let sequential_ms = timing.stages[0].elapsed_ms;
    let variants = timing
        .stages
        .iter()
        .map(|stage| VariantReport {
            schedule: stage.label.clone(),
            elapsed_ms: stage.elapsed_ms,
            speedup: sequential_ms / stage.elapsed_ms.max(f64::EPSILON),
        })
        .collect();

    let params = ctx.params();
    let (width, height, channels) = ctx.baseline().shape();
    Ok(ComparisonRun {
        outputs,
        report: ComparisonReport {
            width,
            height,
            channels,
            region: ctx.region(),
            iterations: params.iterations,
            threads: params.threads,
            chunk_rows: params.chunk_rows,
            variants,
            timing,
        },
    })
}
