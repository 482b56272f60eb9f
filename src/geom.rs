//! 2D geometry primitives for joystick coordinate mapping.
//!
//! Points live in one of two frames: area-local (origin at the top-left of
//! the control area, y growing downward) for displayed thumb positions, and
//! origin-relative (origin at the area midpoint) for emitted readings.
//! Angles follow the conventional math orientation despite the flipped
//! screen axis: 0° points right, 90° points up (negative y).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point or vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, scalar: f64) -> Point {
        Point {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Polar representation of an emitted joystick reading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarPoint {
    /// Angle in degrees, normalized to `[0, 360)`.
    pub degrees: f64,
    /// Distance from the origin.
    pub distance: f64,
}

/// Convert a point to polar coordinates relative to `origin`.
///
/// The vertical delta is negated so the angle reads in math orientation
/// even though screen y grows downward:
/// - `(1, 0)` → 0°, distance 1
/// - `(0, -1)` → 90°, distance 1
/// - `(-1, 0)` → 180°, distance 1
///
/// The zero vector maps to 0°, distance 0.
pub fn to_polar(point: Point, origin: Point) -> PolarPoint {
    let dx = point.x - origin.x;
    let dy = origin.y - point.y;
    let distance = (dx * dx + dy * dy).sqrt();
    let mut degrees = dy.atan2(dx).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    PolarPoint { degrees, distance }
}
