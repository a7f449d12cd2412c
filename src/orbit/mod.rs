//! Deterministic orbit core
//!
//! All phase mutation lives here. This module must be pure and deterministic:
//! - Host-driven ticks only (no internal timers)
//! - Seeded RNG only
//! - Stable body order (by construction index)
//! - No rendering or platform dependencies

pub mod angle;
pub mod body;
pub mod events;
pub mod field;

pub use angle::{phase_from_position, position_on_ring, wrap_phase};
pub use body::{BodyMode, Direction, OrbitBody};
pub use events::{FieldEvents, NullEvents};
pub use field::{OrbitField, Ring};
