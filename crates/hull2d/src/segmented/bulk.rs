//! Bulk primitives for the segmented engine: map, scan, segmented arg-max,
//! stable partition.
//!
//! Each primitive writes only its own output slots and reads shared state that
//! the previous step committed. With the `parallel` feature the map, scan and
//! reduction run on the rayon pool; partitions stay sequential (memory bound).

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::ops::Range;

use crate::point::Point;

#[cfg(feature = "parallel")]
const SCAN_CHUNK: usize = 1 << 14;

/// `f(i, &mut out[i])` for every slot.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_indexed<T, F>(out: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    out.par_iter_mut().enumerate().for_each(|(i, o)| f(i, o));
}

/// `f(i, &mut out[i])` for every slot.
#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_indexed<T, F>(out: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    out.iter_mut().enumerate().for_each(|(i, o)| f(i, o));
}

/// Inclusive prefix sum over `flags`, stored 0-based in `keys`; returns the total.
///
/// Two passes over fixed chunks: per-chunk counts, then a local scan of each
/// chunk from its offset.
#[cfg(feature = "parallel")]
pub(crate) fn inclusive_scan_keys(flags: &[bool], keys: &mut [usize]) -> usize {
    debug_assert_eq!(flags.len(), keys.len());
    let sums: Vec<usize> = flags
        .par_chunks(SCAN_CHUNK)
        .map(|c| c.iter().filter(|&&f| f).count())
        .collect();
    let mut offsets = Vec::with_capacity(sums.len());
    let mut total = 0;
    for s in sums {
        offsets.push(total);
        total += s;
    }
    keys.par_chunks_mut(SCAN_CHUNK)
        .zip(flags.par_chunks(SCAN_CHUNK))
        .zip(offsets.par_iter())
        .for_each(|((ks, fs), &base)| {
            scan_chunk(fs, ks, base);
        });
    total
}

/// Inclusive prefix sum over `flags`, stored 0-based in `keys`; returns the total.
#[cfg(not(feature = "parallel"))]
pub(crate) fn inclusive_scan_keys(flags: &[bool], keys: &mut [usize]) -> usize {
    debug_assert_eq!(flags.len(), keys.len());
    scan_chunk(flags, keys, 0)
}

#[inline]
fn scan_chunk(flags: &[bool], keys: &mut [usize], base: usize) -> usize {
    let mut acc = base;
    for (k, &f) in keys.iter_mut().zip(flags) {
        acc += f as usize;
        *k = acc.saturating_sub(1);
    }
    acc
}

/// Per segment, the farthest slot among those with a non-negative value.
///
/// `farther(i, j)` says slot `i` strictly beats slot `j` of the same segment;
/// ties keep the lowest index. `keys` is non-decreasing and `starts[k]` is the
/// first index of segment `k`; `out[k]` is `None` when segment `k` has no
/// non-negative value. Each segment is reduced over its own contiguous range.
#[cfg(feature = "parallel")]
pub(crate) fn segmented_argmax<F>(
    keys: &[usize],
    values: &[f64],
    starts: &[usize],
    farther: F,
    out: &mut [Option<usize>],
) where
    F: Fn(usize, usize) -> bool + Sync,
{
    debug_assert_eq!(keys.len(), values.len());
    debug_assert_eq!(starts.len(), out.len());
    out.par_iter_mut().enumerate().for_each(|(k, o)| {
        let lo = starts[k];
        let hi = starts.get(k + 1).copied().unwrap_or(values.len());
        debug_assert!(keys[lo..hi].iter().all(|&kk| kk == k));
        *o = argmax_nonneg(values, lo..hi, &farther);
    });
}

/// Per segment, the farthest slot among those with a non-negative value.
///
/// Single pass over the key runs; the accumulator resets at every boundary.
#[cfg(not(feature = "parallel"))]
pub(crate) fn segmented_argmax<F>(
    keys: &[usize],
    values: &[f64],
    starts: &[usize],
    farther: F,
    out: &mut [Option<usize>],
) where
    F: Fn(usize, usize) -> bool + Sync,
{
    debug_assert_eq!(keys.len(), values.len());
    debug_assert_eq!(starts.len(), out.len());
    out.fill(None);
    let mut cur = None;
    let mut best: Option<usize> = None;
    for (i, (&k, &v)) in keys.iter().zip(values).enumerate() {
        if cur != Some(k) {
            if let Some(prev) = cur {
                out[prev] = best;
            }
            debug_assert_eq!(starts[k], i);
            cur = Some(k);
            best = None;
        }
        if v >= 0.0 && best.map_or(true, |j| farther(i, j)) {
            best = Some(i);
        }
    }
    if let Some(prev) = cur {
        out[prev] = best;
    }
}

#[cfg(feature = "parallel")]
fn argmax_nonneg<F>(values: &[f64], range: Range<usize>, farther: &F) -> Option<usize>
where
    F: Fn(usize, usize) -> bool,
{
    let mut best: Option<usize> = None;
    for i in range.filter(|&i| values[i] >= 0.0) {
        if best.map_or(true, |j| farther(i, j)) {
            best = Some(i);
        }
    }
    best
}

/// Move `keep` slots to the front, preserving relative order in both groups.
///
/// `points` and `heads` are permuted together through the scratch buffers.
/// Returns the number of kept slots.
pub(crate) fn stable_partition(
    points: &mut [Point],
    heads: &mut [bool],
    keep: &[bool],
    scratch_pts: &mut [Point],
    scratch_heads: &mut [bool],
) -> usize {
    let n = points.len();
    debug_assert!(heads.len() == n && keep.len() == n);
    let mut w = 0;
    for i in (0..n).filter(|&i| keep[i]) {
        scratch_pts[w] = points[i];
        scratch_heads[w] = heads[i];
        w += 1;
    }
    let split = w;
    if split == n {
        return n;
    }
    for i in (0..n).filter(|&i| !keep[i]) {
        scratch_pts[w] = points[i];
        scratch_heads[w] = heads[i];
        w += 1;
    }
    points.copy_from_slice(&scratch_pts[..n]);
    heads.copy_from_slice(&scratch_heads[..n]);
    split
}
