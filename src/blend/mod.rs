//! Blend pipeline orchestrating classification, compositing and solving.
//!
//! Overview
//! - Validates input shapes and configuration up front; nothing is computed
//!   for rejected inputs.
//! - Classifies mask samples into `Inside` / `Boundary` / `Outside` and
//!   derives the bounding box of the boundary.
//! - Builds the copy-paste baseline and the guidance field once.
//! - Solves the relaxation with any of the three schedules; a mask with no
//!   boundary pixels makes every solve a no-op returning the baseline.
//!
//! Modules
//! - [`composite`] – the pre-blend baseline.
//! - [`guidance`] – the precomputed Laplacian forcing term.
//! - [`params`] – configuration types used by the pipeline and CLI.

pub mod composite;
pub mod guidance;
pub mod params;

pub use composite::composite_baseline;
pub use guidance::guidance_field;
pub use params::BlendParams;

use crate::error::BlendError;
use crate::image::PlanarF32;
use crate::mask::{bounding_box, classify_mask, LabelField, Region};
use crate::solver::{solve_banded, solve_chunked, solve_sequential, SolveInputs};
use log::debug;

/// Scheduling variant of the shared relaxation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Single thread, nested channel/row/column loops.
    Sequential,
    /// One static contiguous row band per worker, barrier per iteration.
    StaticBands,
    /// Fixed-size row chunks handed to idle workers, rebalanced per iteration.
    DynamicChunks,
}

impl Schedule {
    /// All schedules, sequential first.
    pub const ALL: [Schedule; 3] = [
        Schedule::Sequential,
        Schedule::StaticBands,
        Schedule::DynamicChunks,
    ];

    /// Stable name used in reports and file names.
    pub fn label(&self) -> &'static str {
        match self {
            Schedule::Sequential => "sequential",
            Schedule::StaticBands => "static-bands",
            Schedule::DynamicChunks => "dynamic-chunks",
        }
    }
}

/// Entry point owning the validated configuration.
#[derive(Debug)]
pub struct PoissonBlender {
    params: BlendParams,
}

impl PoissonBlender {
    /// Validate `params` and construct the blender.
    pub fn new(params: BlendParams) -> Result<Self, BlendError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BlendParams {
        &self.params
    }

    /// Validate input shapes and run every pre-solve stage: classification,
    /// bounding box, baseline composite and guidance field.
    ///
    /// Source, target and mask must share width, height and channel count.
    pub fn prepare(
        &self,
        source: &PlanarF32,
        target: &PlanarF32,
        mask: &PlanarF32,
    ) -> Result<BlendContext, BlendError> {
        check_nonempty("target", target)?;
        check_nonempty("source", source)?;
        check_nonempty("mask", mask)?;
        check_shape("source", source, target)?;
        check_shape("mask", mask, target)?;

        let labels = classify_mask(mask, self.params.mask_threshold);
        let region = bounding_box(&labels);
        match region {
            Some(r) => debug!(
                "region of interest {}x{} at ({}, {}), {} pixels per plane",
                r.width(),
                r.height(),
                r.x0,
                r.y0,
                r.pixel_count()
            ),
            None => debug!("mask has no boundary pixels; blending is a no-op"),
        }
        let baseline = composite_baseline(source, target, &labels);
        let guidance = match region {
            Some(r) => guidance_field(target, &r),
            None => PlanarF32::new(target.w, target.h, target.channels),
        };
        Ok(BlendContext {
            params: self.params,
            labels,
            region,
            baseline,
            guidance,
        })
    }
}

/// Prepared inputs for one blend: label field, region, baseline and guidance.
///
/// Construction is the only writer of these buffers; solving mutates nothing
/// here and returns fresh output buffers, so one context can serve any number
/// of solves.
#[derive(Debug)]
pub struct BlendContext {
    params: BlendParams,
    labels: LabelField,
    region: Option<Region>,
    baseline: PlanarF32,
    guidance: PlanarF32,
}

impl BlendContext {
    pub fn params(&self) -> &BlendParams {
        &self.params
    }

    pub fn labels(&self) -> &LabelField {
        &self.labels
    }

    /// Bounding box of the mask boundary; `None` when the mask produced no
    /// boundary pixels.
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Pre-blend copy-paste output.
    pub fn baseline(&self) -> &PlanarF32 {
        &self.baseline
    }

    pub fn guidance(&self) -> &PlanarF32 {
        &self.guidance
    }

    /// Run the configured iteration budget under `schedule`.
    ///
    /// Samples not labelled `Inside`, and everything outside the region of
    /// interest, keep their baseline values exactly.
    pub fn solve(&self, schedule: Schedule) -> Result<PlanarF32, BlendError> {
        let Some(region) = self.region else {
            return Ok(self.baseline.clone());
        };
        let inputs = SolveInputs {
            baseline: &self.baseline,
            guidance: &self.guidance,
            labels: &self.labels,
            region,
        };
        match schedule {
            Schedule::Sequential => Ok(solve_sequential(&inputs, self.params.iterations)),
            Schedule::StaticBands => {
                solve_banded(&inputs, self.params.iterations, self.params.threads)
            }
            Schedule::DynamicChunks => solve_chunked(
                &inputs,
                self.params.iterations,
                self.params.threads,
                self.params.chunk_rows,
            ),
        }
    }
}

fn check_nonempty(what: &'static str, img: &PlanarF32) -> Result<(), BlendError> {
    if img.w == 0 || img.h == 0 || img.channels == 0 {
        return Err(BlendError::EmptyImage { what });
    }
    Ok(())
}

fn check_shape(
    what: &'static str,
    img: &PlanarF32,
    reference: &PlanarF32,
) -> Result<(), BlendError> {
    if !img.same_shape(reference) {
        return Err(BlendError::ShapeMismatch {
            what,
            expected: reference.shape(),
            actual: img.shape(),
        });
    }
    Ok(())
}
