//! Typed errors reported by the blending core.
//!
//! I/O and config helpers keep plain `Result<_, String>` with path context;
//! the numeric core reports precondition failures through [`BlendError`] so
//! callers can match on the failure kind.
use std::fmt;

/// Precondition failure raised before any blending work starts.
///
/// All variants are non-recoverable for the given inputs: the computation is
/// deterministic, so retrying without changing inputs or configuration cannot
/// succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlendError {
    /// An input buffer has a zero width, height or channel count.
    EmptyImage {
        /// Which input failed the check ("source", "target" or "mask").
        what: &'static str,
    },
    /// Source, target and mask must share width, height and channel count.
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },
    /// Rejected solver configuration (iteration count, threads, chunk size,
    /// mask threshold).
    InvalidConfig(String),
}

impl fmt::Display for BlendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlendError::EmptyImage { what } => {
                write!(f, "{what} image is empty (zero width, height or channels)")
            }
            BlendError::ShapeMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{what} shape {}x{}x{} does not match target shape {}x{}x{}",
                actual.0, actual.1, actual.2, expected.0, expected.1, expected.2
            ),
            BlendError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for BlendError {}
