//! Point primitive shared by every hull engine.
//!
//! - `Point`: plain `(x, y)` value with lexicographic ordering.
//! - `Point::cross`: float cross product of two free vectors.
//! - `Point::orient`, `Point::cmp_offset`: exact predicates on input
//!   coordinates (`robust`). Every sign decision in the engines goes
//!   through these, so all engines agree on near-degenerate input.
//!
//! Conventions
//! - Ordering is lexicographic (`x` first, `y` as tie-break). `lex_cmp` turns
//!   the partial order into a total one for sorting (incomparable values
//!   compare equal), matching how the rest of the crate sorts floats.
//! - Conversions to and from `nalgebra::Vector2<f64>` keep the engines free of
//!   nalgebra while callers can stay in `Vec2` land.

use nalgebra::Vector2;
use robust::{Coord, Coord3D};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point (or free vector) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `u.x * v.y - u.y * v.x`: twice the signed area of `(0, u, v)`.
    ///
    /// Positive when `v` lies counter-clockwise of `u`. For a fixed `u`, the
    /// magnitude is proportional to the distance of `v` from the line along `u`.
    #[inline]
    pub fn cross(u: Point, v: Point) -> f64 {
        u.x * v.y - u.y * v.x
    }

    /// Total lexicographic comparison for sorting.
    #[inline]
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Exact orientation of `c` relative to the directed line `a → b`.
    ///
    /// The sign is exact: positive when `(a, b, c)` is counter-clockwise,
    /// negative when clockwise, zero when collinear. The magnitude
    /// approximates twice the triangle area.
    #[inline]
    pub fn orient(a: Point, b: Point, c: Point) -> f64 {
        robust::orient2d(
            Coord { x: a.x, y: a.y },
            Coord { x: b.x, y: b.y },
            Coord { x: c.x, y: c.y },
        )
    }

    /// Exact comparison of how far `p` and `q` lie to the right of `u → v`.
    ///
    /// `Greater` when `p` is strictly farther right than `q`. The sign of
    /// `cross(u - v, p - q)` is evaluated as the 3D orientation of the
    /// lifted points `(u, 0), (v, 0), (p, 1), (q, 1)`, so no difference is
    /// rounded.
    #[inline]
    pub fn cmp_offset(u: Point, v: Point, p: Point, q: Point) -> Ordering {
        let det = robust::orient3d(
            Coord3D { x: u.x, y: u.y, z: 0.0 },
            Coord3D { x: v.x, y: v.y, z: 0.0 },
            Coord3D { x: p.x, y: p.y, z: 1.0 },
            Coord3D { x: q.x, y: q.y, z: 1.0 },
        );
        det.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            o => Some(o),
        }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
