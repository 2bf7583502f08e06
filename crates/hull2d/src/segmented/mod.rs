//! Segmented hull: QuickHull as a fixed-point iteration over flat arrays.
//!
//! Purpose
//! - Same contract as [`crate::quickhull`], but every round is a short
//!   sequence of bulk steps (scan, map, segmented arg-max, stable partition),
//!   so each step parallelises over the live points.
//!
//! Layout
//! - After the initial split the buffer reads `[R, upper.. | L, lower..]`.
//!   Head points are confirmed hull vertices; each head opens a segment that
//!   runs up to the next head, and its defining edge goes from that head to
//!   the next one (cyclically).
//! - A round picks the farthest point of every segment, promotes it to a
//!   head and discards whatever fell inside the new triangle. Rounds stop
//!   once every live point is a head.
//!
//! Side tests and farthest-point comparisons use the exact predicates on
//! `Point`; `dist` only carries the sign that marks a candidate.
//!
//! The working arrays are owned by the engine, sized once and reused across
//! runs; a run larger than the current capacity grows them before the first
//! round.

mod bulk;

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::collinear;
use crate::engine::HullEngine;
use crate::ops::{extremes, partition_front};
use crate::point::Point;

use bulk::{for_each_indexed, inclusive_scan_keys, segmented_argmax, stable_partition};

/// Reusable bulk-parallel hull engine.
#[derive(Clone, Debug, Default)]
pub struct SegmentedHull {
    head: Vec<bool>,
    key: Vec<usize>,
    dist: Vec<f64>,
    outer: Vec<bool>,
    first_pts: Vec<usize>,
    flag: Vec<Option<usize>>,
    scratch_pts: Vec<Point>,
    scratch_head: Vec<bool>,
    rounds: usize,
}

impl SegmentedHull {
    /// Engine with working arrays for up to `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut engine = Self::default();
        engine.reserve(capacity);
        engine
    }

    /// Number of points the working arrays hold without growing.
    pub fn capacity(&self) -> usize {
        self.head.len()
    }

    /// Grow the working arrays to at least `n` slots.
    pub fn reserve(&mut self, n: usize) {
        if self.head.len() >= n {
            return;
        }
        self.head.resize(n, false);
        self.key.resize(n, 0);
        self.dist.resize(n, 0.0);
        self.outer.resize(n, false);
        self.first_pts.resize(n, 0);
        self.flag.resize(n, None);
        self.scratch_pts.resize(n, Point::default());
        self.scratch_head.resize(n, false);
    }

    /// Rounds taken by the most recent run.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Segmented hull in place; returns `h` with `points[..h]` the hull vertex set.
    pub fn run(&mut self, points: &mut [Point]) -> usize {
        let n = points.len();
        self.rounds = 0;
        let Some((left, right)) = extremes(points) else {
            return 0;
        };
        if left == right {
            return 1;
        }
        self.reserve(n);

        let pivot = partition_front(points, |p| p == right || Point::orient(left, right, p) > 0.0);
        points[..pivot].sort_by(|a, b| b.lex_cmp(a));
        points[pivot..].sort_by(Point::lex_cmp);
        assert!(points[0] == right, "upper half must start at the max point");
        assert!(points[pivot] == left, "lower half must start at the min point");

        let Self {
            head,
            key,
            dist,
            outer,
            first_pts,
            flag,
            scratch_pts,
            scratch_head,
            rounds,
        } = self;

        head[..n].fill(false);
        head[0] = true;
        head[pivot] = true;

        let mut live = n;
        let mut prev_count = 0;
        loop {
            let hull_count = inclusive_scan_keys(&head[..live], &mut key[..live]);
            if hull_count == live {
                break;
            }
            if hull_count <= prev_count {
                warn!(
                    hull_count,
                    live,
                    round = *rounds,
                    "segmented hull stopped growing; leaving loop"
                );
                break;
            }
            prev_count = hull_count;
            *rounds += 1;

            let pts: &[Point] = &points[..live];
            let keys: &[usize] = &key[..live];

            for i in (0..live).filter(|&i| head[i]) {
                first_pts[keys[i]] = i;
            }
            let anchors: &[usize] = &first_pts[..hull_count];

            for_each_indexed(&mut dist[..live], |i, d| {
                let k = keys[i];
                let a = pts[anchors[k]];
                let b = pts[anchors[(k + 1) % hull_count]];
                let p = pts[i];
                *d = if p == a || p == b {
                    -1.0
                } else {
                    -Point::orient(a, b, p)
                };
            });

            let farther = |i: usize, j: usize| {
                let k = keys[i];
                let a = pts[anchors[k]];
                let b = pts[anchors[(k + 1) % hull_count]];
                Point::cmp_offset(a, b, pts[i], pts[j]) == Ordering::Greater
            };
            segmented_argmax(keys, &dist[..live], anchors, farther, &mut flag[..hull_count]);
            let farthest: &[Option<usize>] = &flag[..hull_count];

            for_each_indexed(&mut head[..live], |i, h| {
                *h |= farthest[keys[i]] == Some(i);
            });

            let heads: &[bool] = &head[..live];
            for_each_indexed(&mut outer[..live], |i, o| {
                if heads[i] {
                    *o = true;
                    return;
                }
                let k = keys[i];
                let Some(f) = farthest[k] else {
                    *o = false;
                    return;
                };
                let a = pts[anchors[k]];
                let b = pts[anchors[(k + 1) % hull_count]];
                let far = pts[f];
                let p = pts[i];
                *o = if p == a || p == b || p == far {
                    false
                } else {
                    Point::orient(a, far, p) <= 0.0 || Point::orient(far, b, p) <= 0.0
                };
            });

            live = stable_partition(
                &mut points[..live],
                &mut head[..live],
                &outer[..live],
                &mut scratch_pts[..live],
                &mut scratch_head[..live],
            );
            debug!(round = *rounds, hull_count, live, "segmented round");
        }

        outer[..live].copy_from_slice(&head[..live]);
        let h = stable_partition(
            &mut points[..live],
            &mut head[..live],
            &outer[..live],
            &mut scratch_pts[..live],
            &mut scratch_head[..live],
        );
        if h <= 2 {
            return h;
        }

        collinear::mark_true_vertices(&points[..h], [left, right], &mut outer[..h]);
        stable_partition(
            &mut points[..h],
            &mut head[..h],
            &outer[..h],
            &mut scratch_pts[..h],
            &mut scratch_head[..h],
        )
    }
}

impl HullEngine for SegmentedHull {
    fn name(&self) -> &'static str {
        "segmented"
    }

    fn hull(&mut self, points: &mut [Point]) -> usize {
        self.run(points)
    }

    fn rounds(&self) -> Option<usize> {
        Some(self.rounds)
    }
}
