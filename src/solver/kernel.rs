//! Shared Jacobi update applied by every scheduling variant.
use crate::image::PlanarF32;
use crate::mask::{LabelField, PixelLabel};

/// Relax one row span `[x0, x0 + cells.len())` at (y, channel).
///
/// `cells` is the span of the back buffer being written; `cur` is the front
/// buffer holding the previous iteration's fully committed values. Only
/// `Inside` samples are written, so everything else keeps its baseline value
/// for the whole solve. Neighbor sums accumulate in f64 before rounding back
/// to f32.
#[inline]
pub(crate) fn relax_row(
    cells: &mut [f32],
    x0: usize,
    y: usize,
    channel: usize,
    cur: &PlanarF32,
    guidance: &PlanarF32,
    labels: &LabelField,
) {
    for (i, out) in cells.iter_mut().enumerate() {
        let x = x0 + i;
        if labels.get(x, y, channel) != PixelLabel::Inside {
            continue;
        }
        let neighbors = cur.get(x + 1, y, channel) as f64
            + cur.get(x - 1, y, channel) as f64
            + cur.get(x, y + 1, channel) as f64
            + cur.get(x, y - 1, channel) as f64;
        *out = (0.25 * (guidance.get(x, y, channel) as f64 + neighbors)) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_inside_cells_are_written() {
        let mut cur = PlanarF32::new(5, 5, 1);
        for y in 0..5 {
            for x in 0..5 {
                cur.set(x, y, 0, 0.5);
            }
        }
        let guidance = PlanarF32::new(5, 5, 1);
        let mut labels = LabelField::new(5, 5, 1);
        labels.set(2, 2, 0, PixelLabel::Inside);

        let mut cells = vec![9.0f32; 3];
        relax_row(&mut cells, 1, 2, 0, &cur, &guidance, &labels);
        assert_eq!(cells[0], 9.0);
        assert_eq!(cells[2], 9.0);
        // 0.25 * (0 + 4 * 0.5)
        assert_eq!(cells[1], 0.5);
    }

    #[test]
    fn guidance_term_shifts_the_average() {
        let mut cur = PlanarF32::new(3, 3, 1);
        for y in 0..3 {
            for x in 0..3 {
                cur.set(x, y, 0, 0.2);
            }
        }
        let mut guidance = PlanarF32::new(3, 3, 1);
        guidance.set(1, 1, 0, 0.4);
        let mut labels = LabelField::new(3, 3, 1);
        labels.set(1, 1, 0, PixelLabel::Inside);

        let mut cells = vec![0.0f32; 1];
        relax_row(&mut cells, 1, 1, 0, &cur, &guidance, &labels);
        // 0.25 * (0.4 + 4 * 0.2)
        assert!((cells[0] - 0.3).abs() < 1e-6);
    }
}
