//! Fixed-budget Jacobi relaxation over the region of interest.
//!
//! Overview
//! - The update rule is shared by every schedule: an `Inside` sample becomes
//!   `0.25 * (guidance + sum of its four neighbors)`, neighbors read from the
//!   previous iteration's buffer.
//! - The solve is double-buffered: each iteration reads the front buffer,
//!   writes `Inside` samples of the back buffer, then swaps. Every schedule
//!   is therefore deterministic and produces the same output for any worker
//!   count.
//! - The iteration budget is the sole stopping criterion; there is no
//!   residual check or early termination.
//!
//! Modules
//! - [`partition`] – row-band decomposition and disjoint mutable row spans.
//! - `sequential` / `banded` / `chunked` – the three schedules.

mod banded;
mod chunked;
mod kernel;
pub mod partition;
mod sequential;

pub use banded::solve_banded;
pub use chunked::solve_chunked;
pub use sequential::solve_sequential;

use crate::image::PlanarF32;
use crate::mask::{LabelField, Region};

/// Borrowed inputs shared by every schedule.
///
/// `region` must lie within the buffers' bounds, and every `Inside` sample
/// must be an interior pixel (the classifier guarantees both). The baseline,
/// guidance and label buffers are read-only during solving; the solver owns
/// its working buffers and returns a fresh output.
pub struct SolveInputs<'a> {
    /// Compositor output; also the value kept by every non-`Inside` sample.
    pub baseline: &'a PlanarF32,
    /// Precomputed Laplacian forcing term.
    pub guidance: &'a PlanarF32,
    /// Per-sample classification.
    pub labels: &'a LabelField,
    /// Bounding box of the mask boundary.
    pub region: Region,
}
