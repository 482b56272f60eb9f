//! Shape-dependent clamping of pointer samples.
//!
//! Both variants share one contract: a raw area-local pointer position goes
//! in, a displayed thumb position (area-local) and an emitted logical
//! position (origin-relative) come out. Out-of-range samples are clamped,
//! never rejected.

use crate::area::{AreaShape, Axis, ControlArea};
use crate::geom::Point;

/// Result of clamping one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedSample {
    /// Thumb position in area-local coordinates, inside the area's hitbox.
    pub displayed: Point,
    /// Logical output centered at the area midpoint, scaled by the area's
    /// `emit_scale` and clamped to `[-width, width] x [-height, height]`.
    pub emitted: Point,
}

/// Clamp a raw pointer sample according to the area's shape.
pub fn clamp_sample(area: &ControlArea, p: Point) -> ClampedSample {
    match area.shape {
        AreaShape::Rect => clamp_rect(area, p),
        AreaShape::Circle => clamp_circle(area, p),
    }
}

/// Rectangular hitbox: each coordinate clamps independently to
/// `[0, width]` / `[0, height]`; a locked axis is pinned to the midpoint
/// coordinate instead.
pub fn clamp_rect(area: &ControlArea, p: Point) -> ClampedSample {
    let midpoint = area.midpoint();
    let locked = area.locked_axis();

    let x = if locked == Some(Axis::X) {
        midpoint.x
    } else {
        p.x.clamp(0.0, area.width)
    };
    let y = if locked == Some(Axis::Y) {
        midpoint.y
    } else {
        p.y.clamp(0.0, area.height)
    };

    let displayed = Point::new(x, y);
    ClampedSample {
        displayed,
        emitted: scale_emitted(area, displayed - midpoint),
    }
}

/// Circular hitbox: positions beyond the radius (`width / 2`) are projected
/// onto the boundary by scaling the midpoint-relative vector; positions
/// inside pass through unchanged.
///
/// An axis lock only takes effect when `width != height` (the degenerate
/// ellipse case); on a true circle the shared derivation already makes it a
/// no-op.
pub fn clamp_circle(area: &ControlArea, p: Point) -> ClampedSample {
    let midpoint = area.midpoint();
    let radius = area.width / 2.0;
    let d = midpoint.distance(p);

    // d == 0 lands in the pass-through branch, so the projection factor is
    // never computed for a zero-length vector.
    let mut displayed = if d > radius {
        midpoint + (p - midpoint) * (radius / d)
    } else {
        p
    };

    match area.locked_axis() {
        Some(Axis::X) => displayed.x = midpoint.x,
        Some(Axis::Y) => displayed.y = midpoint.y,
        None => {}
    }

    ClampedSample {
        displayed,
        emitted: scale_emitted(area, displayed - midpoint),
    }
}

/// Scale the origin-relative delta and clamp it to the emitted range.
fn scale_emitted(area: &ControlArea, delta: Point) -> Point {
    let scaled = delta * area.emit_scale;
    Point::new(
        scaled.x.clamp(-area.width, area.width),
        scaled.y.clamp(-area.height, area.height),
    )
}
