//! Drag state machine: pointer samples in, clamped joystick output out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::area::{AreaError, ControlArea};
use crate::clamp::clamp_sample;
use crate::geom::Point;
use crate::monitor::JoystickMonitor;

/// Phase of a pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer event in the control area's local frame. Positions may
/// exceed the area bounds; they are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: DragPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(phase: DragPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging,
}

/// Converts a stream of pointer samples into clamped joystick readings.
///
/// `Down` and `Move` are handled identically (there is no distinct "begin"
/// output): each runs the shape clamper and publishes the result. `Up` and
/// `Cancel` return to idle and apply the release rule: displayed resets to
/// the midpoint and emitted to zero unless the area locks in place, in
/// which case the last reading is retained. A zero-movement release (tap)
/// behaves exactly like a release after a drag, and the release rule is
/// applied at most once per gesture because releasing is what ends it.
///
/// The machine carries no other state across gestures.
pub struct JoystickTracker {
    area: ControlArea,
    state: DragState,
    monitor: JoystickMonitor,
}

impl JoystickTracker {
    /// Build a tracker for one joystick instance. Fails fast on an invalid
    /// area; sample processing itself cannot fail.
    pub fn new(area: ControlArea) -> Result<Self, AreaError> {
        area.validate()?;
        let monitor = JoystickMonitor::new(area.midpoint());
        Ok(Self {
            area,
            state: DragState::Idle,
            monitor,
        })
    }

    pub fn area(&self) -> &ControlArea {
        &self.area
    }

    /// Output sink: read the latest reading here.
    pub fn monitor(&self) -> &JoystickMonitor {
        &self.monitor
    }

    /// Output sink, mutable for observer registration.
    pub fn monitor_mut(&mut self) -> &mut JoystickMonitor {
        &mut self.monitor
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Feed one pointer sample. Observers are notified synchronously before
    /// this returns.
    pub fn handle(&mut self, sample: PointerSample) {
        match sample.phase {
            DragPhase::Down | DragPhase::Move => {
                self.state = DragState::Dragging;
                let clamped = clamp_sample(&self.area, sample.position());
                debug!(
                    phase = ?sample.phase,
                    x = sample.x,
                    y = sample.y,
                    thumb_x = clamped.displayed.x,
                    thumb_y = clamped.displayed.y,
                    "pointer sample"
                );
                self.monitor.publish(clamped.displayed, clamped.emitted);
            }
            DragPhase::Up | DragPhase::Cancel => {
                self.state = DragState::Idle;
                if self.area.locks_in_place {
                    debug!(phase = ?sample.phase, "release: retaining last reading");
                } else {
                    debug!(phase = ?sample.phase, "release: reset to center");
                    self.monitor.publish(self.area.midpoint(), Point::ZERO);
                }
            }
        }
    }
}
