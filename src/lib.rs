//! Solar Orbits - a draggable concentric-orbit simulation core
//!
//! Core modules:
//! - `orbit`: deterministic orbit state machines (angle math, bodies, field)
//! - `config`: field layout and timing configuration
//! - `error`: error taxonomy
//!
//! The crate is headless. The host owns rendering and hit-testing, feeds
//! frame ticks and pointer events in by body id, and observes manipulation
//! callbacks through [`orbit::FieldEvents`].

pub mod config;
pub mod error;
pub mod orbit;

pub use config::FieldConfig;
pub use error::OrbitError;
pub use orbit::{BodyMode, Direction, FieldEvents, NullEvents, OrbitBody, OrbitField, Ring};

/// Layout and timing defaults
pub mod consts {
    /// Full-revolution period shared by all bodies (seconds)
    pub const REVOLUTION_SECS: f32 = 5.0;
    /// Delay between construction and a body entering orbit (seconds)
    pub const PLACEMENT_DELAY_SECS: f32 = 0.5;
    /// Default number of rings (one body per ring)
    pub const DEFAULT_RING_COUNT: usize = 8;
    /// Default radial distance between consecutive rings
    pub const DEFAULT_RING_SPACING: f32 = 25.0;
}

/// Convert degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}
