//! Observable output sink for joystick readings.

use crate::geom::{to_polar, Point, PolarPoint};

/// The latest joystick reading in both representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputState {
    /// Thumb position in area-local coordinates.
    pub displayed: Point,
    /// Logical origin-relative output.
    pub emitted: Point,
    /// Polar form of `emitted`.
    pub polar: PolarPoint,
}

type Observer = Box<dyn FnMut(&OutputState)>;

/// Holds the last emitted reading and republishes every change.
///
/// Exactly one producer (the drag state machine) mutates the state.
/// Observers are notified synchronously on the producing thread, in
/// subscription order, before the next sample can be processed; no
/// intermediate reading is buffered or coalesced. Observers must treat the
/// state as read-only.
pub struct JoystickMonitor {
    state: OutputState,
    observers: Vec<Observer>,
}

impl JoystickMonitor {
    /// New monitor at rest: thumb at the area midpoint, zero output.
    pub fn new(midpoint: Point) -> Self {
        Self {
            state: OutputState {
                displayed: midpoint,
                emitted: Point::ZERO,
                polar: PolarPoint::default(),
            },
            observers: Vec::new(),
        }
    }

    /// Latest published reading.
    pub fn output(&self) -> &OutputState {
        &self.state
    }

    /// Register an observer called synchronously for every subsequent
    /// change.
    pub fn subscribe(&mut self, observer: impl FnMut(&OutputState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Store a new reading, derive its polar form, and notify all observers
    /// before returning.
    pub(crate) fn publish(&mut self, displayed: Point, emitted: Point) {
        self.state = OutputState {
            displayed,
            emitted,
            polar: to_polar(emitted, Point::ZERO),
        };
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}
