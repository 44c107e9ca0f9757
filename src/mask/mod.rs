//! Mask classification and the region of interest derived from it.

pub mod classify;
pub mod label;
pub mod region;

pub use self::classify::classify_mask;
pub use self::label::{LabelField, PixelLabel};
pub use self::region::{bounding_box, Region};
