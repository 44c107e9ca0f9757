#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod blend;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod mask;
pub mod solver;

// --- High-level re-exports -------------------------------------------------

// Main entry points: blender + prepared context.
pub use crate::blend::{BlendContext, BlendParams, PoissonBlender, Schedule};
pub use crate::error::BlendError;
pub use crate::image::PlanarF32;
pub use crate::mask::{LabelField, PixelLabel, Region};

// Harness-level comparison across schedules.
pub use crate::diagnostics::{run_comparison, ComparisonReport, ComparisonRun};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use poisson_blend::prelude::*;
///
/// # fn main() -> Result<(), poisson_blend::BlendError> {
/// let source = PlanarF32::new(64, 64, 3);
/// let target = PlanarF32::new(64, 64, 3);
/// let mask = PlanarF32::new(64, 64, 3);
///
/// let blender = PoissonBlender::new(BlendParams::default().with_iterations(100))?;
/// let ctx = blender.prepare(&source, &target, &mask)?;
/// let out = ctx.solve(Schedule::Sequential)?;
/// println!("blended {}x{}", out.w, out.h);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::blend::{BlendParams, PoissonBlender, Schedule};
    pub use crate::image::PlanarF32;
}
