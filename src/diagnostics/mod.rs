//! Timing diagnostics and the schedule-comparison harness.
//!
//! `ComparisonRun` is the main entry point returned by [`run_comparison`],
//! bundling one output buffer per schedule with a serializable
//! `ComparisonReport` of per-variant wall-clock times and speedups.

pub mod comparison;
pub mod timing;

pub use comparison::{run_comparison, ComparisonReport, ComparisonRun, VariantReport};
pub use timing::{StageTiming, TimingBreakdown};
