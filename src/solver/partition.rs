//! Domain decomposition of the region of interest.
//!
//! Both parallel schedules write through disjoint mutable row spans carved
//! out of the back buffer, so worker ownership is enforced by construction
//! rather than by convention: a span handed to one worker cannot alias a
//! span handed to another.
use crate::image::PlanarF32;
use crate::mask::Region;

/// Mutable span of one in-region row of one channel plane.
pub struct RowSegmentMut<'a> {
    pub channel: usize,
    pub y: usize,
    pub x0: usize,
    pub cells: &'a mut [f32],
}

/// Split a region into `count` contiguous, disjoint row bands covering the
/// region exactly.
///
/// Returns fewer than `count` bands when the region has fewer rows than
/// workers; never returns an empty band.
pub fn row_bands(region: &Region, count: usize) -> Vec<Region> {
    let rows = region.height();
    let bands = count.clamp(1, rows);
    let base = rows / bands;
    let extra = rows % bands;
    let mut out = Vec::with_capacity(bands);
    let mut y = region.y0;
    for i in 0..bands {
        let take = base + usize::from(i < extra);
        let y1 = y + take - 1;
        out.push(Region {
            x0: region.x0,
            y0: y,
            x1: region.x1,
            y1,
        });
        y = y1 + 1;
    }
    out
}

/// Carve the back buffer into one mutable span per in-region row, ordered by
/// (channel, y). Every span is disjoint from every other.
pub fn row_segments_mut<'a>(buf: &'a mut PlanarF32, region: &Region) -> Vec<RowSegmentMut<'a>> {
    let len = region.width();
    let spans: Vec<(usize, usize, usize)> = {
        let b = &*buf;
        (0..b.channels)
            .flat_map(|channel| {
                (region.y0..=region.y1).map(move |y| (channel, y, b.idx(region.x0, y, channel)))
            })
            .collect()
    };
    let mut segments = Vec::with_capacity(spans.len());
    let mut rest: &mut [f32] = buf.as_mut_slice();
    let mut consumed = 0usize;
    for (channel, y, start) in spans {
        let tail = std::mem::take(&mut rest);
        let (_, tail) = tail.split_at_mut(start - consumed);
        let (cells, tail) = tail.split_at_mut(len);
        segments.push(RowSegmentMut {
            channel,
            y,
            x0: region.x0,
            cells,
        });
        rest = tail;
        consumed = start + len;
    }
    segments
}

/// Bucket row segments into the band each row belongs to.
pub fn group_by_band<'a>(
    segments: Vec<RowSegmentMut<'a>>,
    bands: &[Region],
) -> Vec<Vec<RowSegmentMut<'a>>> {
    let mut groups: Vec<Vec<RowSegmentMut<'a>>> = (0..bands.len()).map(|_| Vec::new()).collect();
    for seg in segments {
        let band = bands
            .iter()
            .position(|b| seg.y >= b.y0 && seg.y <= b.y1)
            .expect("bands cover every region row");
        groups[band].push(seg);
    }
    groups
}

/// Group row segments into fixed-size chunks of `chunk_rows` rows; the final
/// chunk may be shorter.
pub fn chunk_segments<'a>(
    segments: Vec<RowSegmentMut<'a>>,
    chunk_rows: usize,
) -> Vec<Vec<RowSegmentMut<'a>>> {
    let capacity = (segments.len() + chunk_rows - 1) / chunk_rows;
    let mut chunks = Vec::with_capacity(capacity);
    let mut current: Vec<RowSegmentMut<'a>> = Vec::with_capacity(chunk_rows);
    for seg in segments {
        current.push(seg);
        if current.len() == chunk_rows {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(chunk_rows)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x0: usize, y0: usize, x1: usize, y1: usize) -> Region {
        Region { x0, y0, x1, y1 }
    }

    #[test]
    fn bands_are_disjoint_and_cover_the_region() {
        let r = region(2, 3, 9, 13);
        let bands = row_bands(&r, 4);
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].y0, r.y0);
        assert_eq!(bands.last().unwrap().y1, r.y1);
        let mut covered = 0;
        for pair in bands.windows(2) {
            assert_eq!(pair[0].y1 + 1, pair[1].y0, "bands must be contiguous");
        }
        for b in &bands {
            assert_eq!(b.x0, r.x0);
            assert_eq!(b.x1, r.x1);
            covered += b.height();
        }
        assert_eq!(covered, r.height());
    }

    #[test]
    fn uneven_rows_spread_the_remainder() {
        let bands = row_bands(&region(0, 0, 0, 10), 4);
        let heights: Vec<usize> = bands.iter().map(|b| b.height()).collect();
        assert_eq!(heights, vec![3, 3, 3, 2]);
    }

    #[test]
    fn more_workers_than_rows_drops_empty_bands() {
        let bands = row_bands(&region(0, 5, 3, 6), 8);
        assert_eq!(bands.len(), 2);
        assert!(bands.iter().all(|b| b.height() == 1));
    }

    #[test]
    fn segments_cover_each_in_region_row_once() {
        let mut buf = PlanarF32::new(6, 5, 2);
        let r = region(1, 1, 4, 3);
        let segments = row_segments_mut(&mut buf, &r);
        assert_eq!(segments.len(), 2 * 3);
        for seg in &segments {
            assert_eq!(seg.cells.len(), r.width());
            assert_eq!(seg.x0, r.x0);
        }
        let mut seen: Vec<(usize, usize)> = segments.iter().map(|s| (s.channel, s.y)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 6, "no row may appear twice");
    }

    #[test]
    fn segment_writes_land_at_the_right_addresses() {
        let mut buf = PlanarF32::new(4, 4, 1);
        let r = region(1, 2, 2, 2);
        {
            let mut segments = row_segments_mut(&mut buf, &r);
            assert_eq!(segments.len(), 1);
            segments[0].cells.fill(1.0);
        }
        assert_eq!(buf.get(1, 2, 0), 1.0);
        assert_eq!(buf.get(2, 2, 0), 1.0);
        assert_eq!(buf.get(0, 2, 0), 0.0);
        assert_eq!(buf.get(3, 2, 0), 0.0);
    }

    #[test]
    fn band_grouping_respects_row_ownership() {
        let mut buf = PlanarF32::new(4, 8, 1);
        let r = region(0, 0, 3, 7);
        let bands = row_bands(&r, 2);
        let groups = group_by_band(row_segments_mut(&mut buf, &r), &bands);
        assert_eq!(groups.len(), 2);
        assert!(groups[0].iter().all(|s| s.y <= 3));
        assert!(groups[1].iter().all(|s| s.y >= 4));
    }

    #[test]
    fn chunks_have_fixed_size_with_a_short_tail() {
        let mut buf = PlanarF32::new(4, 7, 1);
        let r = region(0, 0, 3, 6);
        let chunks = chunk_segments(row_segments_mut(&mut buf, &r), 3);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }
}
