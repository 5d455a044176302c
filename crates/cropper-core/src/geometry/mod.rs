//! Geometry primitives for the cropper engine.
//!
//! Everything in here is a pure function of its arguments. The reducer calls
//! these on every pointer-move frame, so they avoid allocation entirely.
//!
//! # Coordinate System
//!
//! - Screen space is y-down, so a positive angle rotates clockwise on screen
//!   (the same convention as CSS `rotate()`)
//! - The crop window's center is the origin of screen space
//! - Angles are in degrees at the API surface and radians internally

mod bounds;

pub use bounds::{furthest_vector, rotated_bounds, rotated_half_extents};

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Remainders below this many radians are treated as an exact quarter turn.
const QUARTER_TURN_SNAP: f64 = 1e-12;

/// A 2D point or vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// True when both components are within `eps` of zero.
    pub fn is_zero(self, eps: f64) -> bool {
        self.x.abs() <= eps && self.y.abs() <= eps
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same size with the axes exchanged.
    #[inline]
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Axis-aligned rectangle of admissible values, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Clamp a point into the rectangle.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.max(self.min_x).min(self.max_x),
            point.y.max(self.min_y).min(self.max_y),
        )
    }

    /// Check containment, allowing `eps` of slack on every edge.
    pub fn contains(&self, point: Point, eps: f64) -> bool {
        point.x >= self.min_x - eps
            && point.x <= self.max_x + eps
            && point.y >= self.min_y - eps
            && point.y <= self.max_y + eps
    }
}

/// Rotate `point` about `pivot` by `radians`.
///
/// In y-down screen space a positive angle is a clockwise turn.
#[inline]
pub fn rotate_point(point: Point, pivot: Point, radians: f64) -> Point {
    let (sin, cos) = sin_cos(radians);
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point {
        x: pivot.x + dx * cos - dy * sin,
        y: pivot.y + dx * sin + dy * cos,
    }
}

/// Rotate `point` about the origin by `turns` exact quarter turns.
///
/// Positive turns are clockwise on screen. Unlike [`rotate_point`] this
/// never introduces rounding error, so four turns give back the input.
pub fn rotate_quarters(point: Point, turns: i32) -> Point {
    match turns.rem_euclid(4) {
        0 => point,
        1 => Point::new(-point.y, point.x),
        2 => Point::new(-point.x, -point.y),
        _ => Point::new(point.y, -point.x),
    }
}

/// Sine and cosine of `radians`, exact at whole quarter turns.
///
/// The angle is split into quarter turns plus a remainder; only the
/// remainder goes through `sin_cos`, so `90°` yields exactly `(1, 0)`
/// instead of `(1, 6.1e-17)`.
pub fn sin_cos(radians: f64) -> (f64, f64) {
    let quarters = (radians / FRAC_PI_2).round();
    let remainder = radians - quarters * FRAC_PI_2;
    let (sin, cos) = if remainder.abs() < QUARTER_TURN_SNAP {
        (0.0, 1.0)
    } else {
        remainder.sin_cos()
    };
    match (quarters as i64).rem_euclid(4) {
        0 => (sin, cos),
        1 => (cos, -sin),
        2 => (-sin, -cos),
        _ => (-cos, sin),
    }
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}
