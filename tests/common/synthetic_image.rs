use poisson_blend::PlanarF32;

/// Buffer filled with a single value on every channel.
pub fn constant(w: usize, h: usize, channels: usize, value: f32) -> PlanarF32 {
    assert!(w > 0 && h > 0 && channels > 0, "image dimensions must be positive");
    let mut img = PlanarF32::new(w, h, channels);
    for c in 0..channels {
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, c, value);
            }
        }
    }
    img
}

/// Left-to-right linear ramp from 0 to 1 on every channel.
pub fn horizontal_gradient(w: usize, h: usize, channels: usize) -> PlanarF32 {
    assert!(w > 1, "gradient needs at least two columns");
    let mut img = PlanarF32::new(w, h, channels);
    for c in 0..channels {
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, c, x as f32 / (w - 1) as f32);
            }
        }
    }
    img
}

/// Top-to-bottom linear ramp from 0 to 1 on every channel.
pub fn vertical_gradient(w: usize, h: usize, channels: usize) -> PlanarF32 {
    assert!(h > 1, "gradient needs at least two rows");
    let mut img = PlanarF32::new(w, h, channels);
    for c in 0..channels {
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, c, y as f32 / (h - 1) as f32);
            }
        }
    }
    img
}

/// Mask set to 1.0 on the closed rectangle `[x0, x1] × [y0, y1]`, zero
/// elsewhere, on every channel.
pub fn square_mask(
    w: usize,
    h: usize,
    channels: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> PlanarF32 {
    let mut mask = PlanarF32::new(w, h, channels);
    for c in 0..channels {
        for y in y0..=y1 {
            for x in x0..=x1 {
                mask.set(x, y, c, 1.0);
            }
        }
    }
    mask
}

/// Largest absolute per-sample difference between two same-shaped buffers.
pub fn max_abs_diff(a: &PlanarF32, b: &PlanarF32) -> f32 {
    assert!(a.same_shape(b), "buffers must share a shape");
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| (x - y).abs())
        .fold(0.0f32, f32::max)
}
