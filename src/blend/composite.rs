//! Naive copy-paste baseline built before any relaxation.
use crate::image::PlanarF32;
use crate::mask::{LabelField, PixelLabel};

/// Build the pre-blend output: the target value where the label is `Inside`,
/// the source value everywhere else. Pure single pass, independent of
/// iteration order.
pub fn composite_baseline(
    source: &PlanarF32,
    target: &PlanarF32,
    labels: &LabelField,
) -> PlanarF32 {
    let (w, h, channels) = source.shape();
    let mut out = source.clone();
    for channel in 0..channels {
        for y in 0..h {
            for x in 0..w {
                if labels.get(x, y, channel) == PixelLabel::Inside {
                    out.set(x, y, channel, target.get(x, y, channel));
                }
            }
        }
    }
    out
}
