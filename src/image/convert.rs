//! Conversion between interleaved and planar sample layouts.
//!
//! Decoders hand back interleaved rows (`[c0 c1 c2, c0 c1 c2, ...]`); the
//! blending core works on planar channel-major buffers. Channel order is
//! reversed during conversion, so running both directions restores the
//! original interleaved ordering.
use super::planar::PlanarF32;

/// Convert an interleaved sample slice to a planar buffer.
///
/// Panics when `data.len() != w * h * channels`.
pub fn interleaved_to_planar(data: &[f32], w: usize, h: usize, channels: usize) -> PlanarF32 {
    assert_eq!(
        data.len(),
        w * h * channels,
        "interleaved buffer length must equal w*h*channels"
    );
    if channels == 1 {
        return PlanarF32::from_vec(w, h, 1, data.to_vec());
    }
    let mut out = PlanarF32::new(w, h, channels);
    for y in 0..h {
        for x in 0..w {
            for c in 0..channels {
                let v = data[(channels - 1 - c) + channels * (x + w * y)];
                out.set(x, y, c, v);
            }
        }
    }
    out
}

/// Convert a planar buffer back to an interleaved sample vector.
pub fn planar_to_interleaved(img: &PlanarF32) -> Vec<f32> {
    let (w, h, channels) = img.shape();
    if channels == 1 {
        return img.as_slice().to_vec();
    }
    let mut out = vec![0.0f32; w * h * channels];
    for y in 0..h {
        for x in 0..w {
            for c in 0..channels {
                out[(channels - 1 - c) + channels * (x + w * y)] = img.get(x, y, c);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_layout_reverses_channel_order() {
        // one pixel, three channels
        let planar = interleaved_to_planar(&[0.1, 0.2, 0.3], 1, 1, 3);
        assert_eq!(planar.get(0, 0, 0), 0.3);
        assert_eq!(planar.get(0, 0, 2), 0.1);
    }

    #[test]
    fn round_trip_restores_interleaved_order() {
        let interleaved: Vec<f32> = (0..2 * 2 * 3).map(|i| i as f32 / 12.0).collect();
        let planar = interleaved_to_planar(&interleaved, 2, 2, 3);
        assert_eq!(planar_to_interleaved(&planar), interleaved);
    }

    #[test]
    fn single_channel_is_a_copy() {
        let data = vec![0.25, 0.5, 0.75, 1.0];
        let planar = interleaved_to_planar(&data, 2, 2, 1);
        assert_eq!(planar.as_slice(), data.as_slice());
    }
}
