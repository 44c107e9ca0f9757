//! Parameters configuring the blend pipeline.
//!
//! Defaults match the reference workload (40000 iterations, 8 workers).
//! Iteration count is the sole stopping criterion; raising it trades time
//! for smoothness, there is no residual check to cut it short.
use crate::error::BlendError;
use serde::Deserialize;

/// Pipeline-wide knobs for classification and solving.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlendParams {
    /// Mask-set cutoff: a sample counts as masked when its value reaches
    /// this threshold. Must lie in (0, 1].
    pub mask_threshold: f32,
    /// Fixed relaxation budget shared by every schedule.
    pub iterations: usize,
    /// Worker threads for the parallel schedules; doubles as the band count
    /// of the static schedule.
    pub threads: usize,
    /// Rows per work unit for the dynamic schedule.
    pub chunk_rows: usize,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            mask_threshold: 0.5,
            iterations: 40_000,
            threads: 8,
            chunk_rows: 4,
        }
    }
}

impl BlendParams {
    pub fn with_mask_threshold(mut self, mask_threshold: f32) -> Self {
        self.mask_threshold = mask_threshold;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = chunk_rows;
        self
    }

    /// Reject configurations the solver cannot run with.
    pub fn validate(&self) -> Result<(), BlendError> {
        if !(self.mask_threshold > 0.0 && self.mask_threshold <= 1.0) {
            return Err(BlendError::InvalidConfig(format!(
                "mask threshold {} outside (0, 1]",
                self.mask_threshold
            )));
        }
        if self.iterations == 0 {
            return Err(BlendError::InvalidConfig(
                "iteration count must be positive".to_string(),
            ));
        }
        if self.threads == 0 {
            return Err(BlendError::InvalidConfig(
                "thread count must be positive".to_string(),
            ));
        }
        if self.chunk_rows == 0 {
            return Err(BlendError::InvalidConfig(
                "chunk size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
