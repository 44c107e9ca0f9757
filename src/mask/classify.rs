//! Boundary classification of mask pixels.
//!
//! Labels every sample `Inside`, `Boundary` or `Outside` from the mask
//! buffer. A pixel counts as mask-set when its value reaches the configured
//! threshold; the same threshold applies to the pixel and to its neighbors.
use super::label::{LabelField, PixelLabel};
use crate::image::PlanarF32;
use log::debug;

/// Label every sample of `mask` using the rule, in priority order:
///
/// 1. pixels on the outer image border are `Outside`, even when mask-set;
/// 2. interior pixels that are mask-set together with their four direct
///    neighbors are `Inside`;
/// 3. remaining mask-set pixels are `Boundary`;
/// 4. everything else is `Outside`.
///
/// Pure function of the mask; `threshold` is the mask-set cutoff.
pub fn classify_mask(mask: &PlanarF32, threshold: f32) -> LabelField {
    let (w, h, channels) = mask.shape();
    let mut labels = LabelField::new(w, h, channels);
    if w < 3 || h < 3 {
        // every pixel is a border pixel
        return labels;
    }
    let set = |x: usize, y: usize, c: usize| mask.get(x, y, c) >= threshold;
    for channel in 0..channels {
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                if !set(x, y, channel) {
                    continue;
                }
                let interior_set = set(x + 1, y, channel)
                    && set(x - 1, y, channel)
                    && set(x, y + 1, channel)
                    && set(x, y - 1, channel);
                let label = if interior_set {
                    PixelLabel::Inside
                } else {
                    PixelLabel::Boundary
                };
                labels.set(x, y, channel, label);
            }
        }
    }
    debug!(
        "classified mask {}x{}x{}: {} inside, {} boundary",
        w,
        h,
        channels,
        labels.count(PixelLabel::Inside),
        labels.count(PixelLabel::Boundary)
    );
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_square(w: usize, h: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> PlanarF32 {
        let mut mask = PlanarF32::new(w, h, 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                mask.set(x, y, 0, 1.0);
            }
        }
        mask
    }

    #[test]
    fn border_pixels_are_outside_even_when_set() {
        let mut mask = PlanarF32::new(5, 5, 1);
        for y in 0..5 {
            for x in 0..5 {
                mask.set(x, y, 0, 1.0);
            }
        }
        let labels = classify_mask(&mask, 0.5);
        for x in 0..5 {
            assert_eq!(labels.get(x, 0, 0), PixelLabel::Outside);
            assert_eq!(labels.get(x, 4, 0), PixelLabel::Outside);
        }
        for y in 0..5 {
            assert_eq!(labels.get(0, y, 0), PixelLabel::Outside);
            assert_eq!(labels.get(4, y, 0), PixelLabel::Outside);
        }
    }

    #[test]
    fn square_mask_splits_into_boundary_ring_and_inside_core() {
        let mask = mask_with_square(7, 7, 2, 2, 4, 4);
        let labels = classify_mask(&mask, 0.5);
        assert_eq!(labels.get(3, 3, 0), PixelLabel::Inside);
        assert_eq!(labels.get(2, 2, 0), PixelLabel::Boundary);
        assert_eq!(labels.get(2, 3, 0), PixelLabel::Boundary);
        assert_eq!(labels.get(1, 3, 0), PixelLabel::Outside);
    }

    #[test]
    fn single_center_pixel_is_boundary() {
        let mask = mask_with_square(3, 3, 1, 1, 1, 1);
        let labels = classify_mask(&mask, 0.5);
        assert_eq!(labels.get(1, 1, 0), PixelLabel::Boundary);
        assert_eq!(labels.count(PixelLabel::Boundary), 1);
        assert_eq!(labels.count(PixelLabel::Inside), 0);
    }

    #[test]
    fn threshold_gates_mask_membership() {
        let mut mask = PlanarF32::new(5, 5, 1);
        for y in 1..4 {
            for x in 1..4 {
                mask.set(x, y, 0, 0.4);
            }
        }
        let labels = classify_mask(&mask, 0.5);
        assert_eq!(labels.count(PixelLabel::Boundary), 0);
        let labels = classify_mask(&mask, 0.3);
        assert!(labels.count(PixelLabel::Boundary) > 0);
    }

    #[test]
    fn tiny_images_classify_entirely_outside() {
        let mut mask = PlanarF32::new(2, 2, 1);
        for y in 0..2 {
            for x in 0..2 {
                mask.set(x, y, 0, 1.0);
            }
        }
        let labels = classify_mask(&mask, 0.5);
        assert_eq!(labels.count(PixelLabel::Outside), 4);
    }
}
