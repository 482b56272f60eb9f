//! On-screen joystick coordinate mapping.
//!
//! Converts raw pointer samples inside a bounded control area (rectangle or
//! circle) into a displayed thumb position clamped to the area's hitbox and
//! an emitted logical position centered at the origin, in both cartesian and
//! polar form. The crate is the geometric core only: a host feeds it pointer
//! samples and observes published readings; rendering, layout, and gesture
//! recognition live outside.
//!
//! A joystick instance is single-threaded by contract: exactly one producer
//! feeds samples and observers are notified synchronously on that thread.
//! Hosts that receive pointer events on multiple threads must serialize
//! access to an instance externally.

pub mod area;
pub mod clamp;
pub mod cli;
pub mod config;
pub mod geom;
pub mod monitor;
pub mod replay;
pub mod tracker;

pub use area::{AreaError, AreaShape, Axis, ControlArea};
pub use clamp::{clamp_sample, ClampedSample};
pub use geom::{to_polar, Point, PolarPoint};
pub use monitor::{JoystickMonitor, OutputState};
pub use tracker::{DragPhase, JoystickTracker, PointerSample};
