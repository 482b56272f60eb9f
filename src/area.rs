//! Control area configuration and the axis-lock policy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geom::Point;

/// Shape of the hitbox within which thumb positions are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaShape {
    Rect,
    Circle,
}

/// Axis frozen by an effective axis lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Invalid control-area configuration.
#[derive(Debug, Error)]
pub enum AreaError {
    #[error("control area dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("emit scale must be positive and finite, got {0}")]
    InvalidEmitScale(f64),
}

/// Immutable per-instance joystick configuration.
///
/// `width` and `height` bound the control area; for a circular joystick the
/// width is the diameter. `emit_scale` multiplies the origin-relative delta
/// before the final clamp to `[-width, width] x [-height, height]`; at the
/// default of `2.0` a full deflection spans the whole area dimension rather
/// than the half-extent.
///
/// A host that wants different settings rebuilds the joystick instance; the
/// area is never mutated live.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControlArea {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_shape")]
    pub shape: AreaShape,
    /// Retain the last position on release instead of resetting to center.
    #[serde(default)]
    pub locks_in_place: bool,
    /// Freeze movement along the smaller dimension (no-op on a square area).
    #[serde(default)]
    pub lock_one_axis: bool,
    #[serde(default = "default_emit_scale")]
    pub emit_scale: f64,
}

fn default_shape() -> AreaShape {
    AreaShape::Rect
}

fn default_emit_scale() -> f64 {
    2.0
}

impl ControlArea {
    /// Create a validated area with default policies (resets on release,
    /// no axis lock, 2x emit scale).
    pub fn new(width: f64, height: f64, shape: AreaShape) -> Result<Self, AreaError> {
        let area = Self {
            width,
            height,
            shape,
            locks_in_place: false,
            lock_one_axis: false,
            emit_scale: default_emit_scale(),
        };
        area.validate()?;
        Ok(area)
    }

    /// Square area from a single dimension (the diameter for circles).
    pub fn square(width: f64, shape: AreaShape) -> Result<Self, AreaError> {
        Self::new(width, width, shape)
    }

    pub fn with_locks_in_place(mut self, locks: bool) -> Self {
        self.locks_in_place = locks;
        self
    }

    pub fn with_lock_one_axis(mut self, lock: bool) -> Self {
        self.lock_one_axis = lock;
        self
    }

    /// Override the emitted-output scale factor. `1.0` makes the emitted
    /// range equal the positional half-extent; validation still applies.
    pub fn with_emit_scale(mut self, scale: f64) -> Self {
        self.emit_scale = scale;
        self
    }

    /// Rest position of the thumb.
    pub fn midpoint(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether the axis-lock request is in effect.
    ///
    /// A lock request on a square area is a no-op: neither axis is smaller
    /// than the other.
    pub fn effective_axis_lock(&self) -> bool {
        self.lock_one_axis && self.width != self.height
    }

    /// The axis frozen by an effective lock: the one with the smaller
    /// dimension.
    pub fn locked_axis(&self) -> Option<Axis> {
        if !self.effective_axis_lock() {
            return None;
        }
        if self.width < self.height {
            Some(Axis::X)
        } else {
            Some(Axis::Y)
        }
    }

    /// Fail fast on an invalid configuration. Deserialized areas must pass
    /// through here before any sample is processed; there is no error path
    /// during sample processing itself.
    pub fn validate(&self) -> Result<(), AreaError> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(AreaError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.emit_scale.is_finite() || self.emit_scale <= 0.0 {
            return Err(AreaError::InvalidEmitScale(self.emit_scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let area = ControlArea::new(120.0, 40.0, AreaShape::Rect).unwrap();
        assert_eq!(area.midpoint(), Point::new(60.0, 20.0));
    }

    #[test]
    fn test_axis_lock_noop_on_square() {
        let area = ControlArea::square(80.0, AreaShape::Rect)
            .unwrap()
            .with_lock_one_axis(true);

        assert!(!area.effective_axis_lock());
        assert_eq!(area.locked_axis(), None);
    }

    #[test]
    fn test_axis_lock_picks_smaller_dimension() {
        let wide = ControlArea::new(120.0, 40.0, AreaShape::Rect)
            .unwrap()
            .with_lock_one_axis(true);
        assert_eq!(wide.locked_axis(), Some(Axis::Y));

        let tall = ControlArea::new(40.0, 120.0, AreaShape::Rect)
            .unwrap()
            .with_lock_one_axis(true);
        assert_eq!(tall.locked_axis(), Some(Axis::X));
    }

    #[test]
    fn test_no_lock_without_request() {
        let area = ControlArea::new(120.0, 40.0, AreaShape::Rect).unwrap();
        assert_eq!(area.locked_axis(), None);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(ControlArea::new(0.0, 40.0, AreaShape::Rect).is_err());
        assert!(ControlArea::new(40.0, -1.0, AreaShape::Rect).is_err());
        assert!(ControlArea::new(f64::NAN, 40.0, AreaShape::Circle).is_err());
        assert!(ControlArea::new(f64::INFINITY, 40.0, AreaShape::Rect).is_err());
    }

    #[test]
    fn test_rejects_bad_emit_scale() {
        let area = ControlArea::square(80.0, AreaShape::Rect)
            .unwrap()
            .with_emit_scale(0.0);
        assert!(area.validate().is_err());

        let area = ControlArea::square(80.0, AreaShape::Rect)
            .unwrap()
            .with_emit_scale(f64::NAN);
        assert!(area.validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let area: ControlArea = serde_yaml::from_str("width: 120\nheight: 40\n").unwrap();

        assert_eq!(area.shape, AreaShape::Rect);
        assert!(!area.locks_in_place);
        assert!(!area.lock_one_axis);
        assert_eq!(area.emit_scale, 2.0);
        assert!(area.validate().is_ok());
    }

    #[test]
    fn test_serde_shape_names() {
        let area: ControlArea =
            serde_yaml::from_str("width: 80\nheight: 80\nshape: circle\n").unwrap();
        assert_eq!(area.shape, AreaShape::Circle);
    }
}
