//! In-place range operations used by the divide engines.
//!
//! All helpers work on plain slices and keep the slice a permutation of its
//! input: nothing is overwritten, only swapped.

use crate::point::Point;

/// Lexicographic `(min, max)` of a non-empty slice.
pub fn extremes(points: &[Point]) -> Option<(Point, Point)> {
    let (&first, rest) = points.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &p| {
        (if p < lo { p } else { lo }, if p > hi { p } else { hi })
    }))
}

/// Move every element matching `pred` to the front and return their count.
///
/// Matching elements keep their relative order; the others end up behind them
/// in unspecified order.
pub fn partition_front<F>(points: &mut [Point], mut pred: F) -> usize
where
    F: FnMut(Point) -> bool,
{
    let mut pivot = 0;
    for i in 0..points.len() {
        if pred(points[i]) {
            points.swap(i, pivot);
            pivot += 1;
        }
    }
    pivot
}

/// Swap `points[src..src+len]` element by element into `points[dst..]`.
///
/// Requires `dst <= src`. Overlapping ranges are fine: the forward swap carries
/// the displaced elements along behind the moved block. Returns `dst + len`.
pub fn swap_ranges(points: &mut [Point], dst: usize, src: usize, len: usize) -> usize {
    assert!(dst <= src, "swap_ranges: destination after source");
    assert!(src + len <= points.len(), "swap_ranges: source out of range");
    if dst != src {
        for i in 0..len {
            points.swap(dst + i, src + i);
        }
    }
    dst + len
}
