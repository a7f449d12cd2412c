//! One body's revolution state machine
//!
//! Phase is the single source of truth for where a body is; cartesian
//! coordinates are always derived from it on demand, never stored. That
//! makes the pointer-up "snap" automatic: releasing a drag just flips the
//! mode back, and the next position read comes from the frozen phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::angle::{phase_from_position, position_on_ring, wrap_phase};
use crate::error::OrbitError;

/// Direction of travel around a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Lifecycle mode of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyMode {
    /// Constructed but still inside the placement delay; not revolving yet
    Unplaced,
    /// Phase advances on every clock tick
    Autonomous,
    /// Phase is driven by pointer position; clock ticks are ignored
    Manipulated,
}

/// A body revolving on one fixed ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitBody {
    pub id: u32,
    /// Shared ring center, fixed at field construction
    center: Vec2,
    /// Distance from the center, fixed for the body's lifetime
    ring_radius: f32,
    /// Fractional position around the ring, in [0, 1) turns
    phase: f32,
    direction: Direction,
    mode: BodyMode,
    /// Presentation hue in [0, 1); never consulted by the orbit math
    pub hue: f32,
    /// Placement delay remaining, in turns of the revolution period
    placement_remaining: f32,
}

impl OrbitBody {
    /// Build a body at `initial_phase` on the ring of `ring_radius`.
    ///
    /// `placement_delay` is in turns of the revolution period; with a zero
    /// delay the body starts revolving on the first tick.
    pub fn new(
        id: u32,
        center: Vec2,
        ring_radius: f32,
        direction: Direction,
        initial_phase: f32,
        hue: f32,
        placement_delay: f32,
    ) -> Result<Self, OrbitError> {
        if !(ring_radius.is_finite() && ring_radius > 0.0) {
            return Err(OrbitError::Configuration(format!(
                "ring radius must be positive and finite, got {ring_radius}"
            )));
        }
        let placement_remaining = placement_delay.max(0.0);
        Ok(Self {
            id,
            center,
            ring_radius,
            phase: wrap_phase(initial_phase),
            direction,
            mode: if placement_remaining > 0.0 {
                BodyMode::Unplaced
            } else {
                BodyMode::Autonomous
            },
            hue,
            placement_remaining,
        })
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn mode(&self) -> BodyMode {
        self.mode
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    /// Whether the placement delay has elapsed and the body is revolving.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.mode != BodyMode::Unplaced
    }

    /// Cartesian position, derived from the current phase.
    pub fn position(&self) -> Vec2 {
        position_on_ring(self.center, self.ring_radius, self.phase, self.direction)
    }

    /// Advance by `dt` turns of the revolution period.
    ///
    /// Unplaced bodies burn the placement delay down without moving.
    /// Manipulated bodies ignore ticks outright (not deferred), so a
    /// pointer-driven phase can never be overwritten after the fact.
    pub fn tick(&mut self, dt: f32) {
        match self.mode {
            BodyMode::Unplaced => {
                self.placement_remaining -= dt;
                if self.placement_remaining <= 0.0 {
                    self.placement_remaining = 0.0;
                    self.mode = BodyMode::Autonomous;
                    log::debug!("body {} placed at phase {:.4}", self.id, self.phase);
                }
            }
            BodyMode::Autonomous => {
                self.phase = wrap_phase(self.phase + dt);
            }
            BodyMode::Manipulated => {}
        }
    }

    /// Pointer-down: pause autonomous advance and hand phase control to the
    /// pointer. Returns whether the transition happened (an unplaced or
    /// already-manipulated body stays put).
    pub fn begin_manipulation(&mut self) -> bool {
        if self.mode != BodyMode::Autonomous {
            return false;
        }
        self.mode = BodyMode::Manipulated;
        true
    }

    /// Pointer-move: re-derive phase from the pointer's bearing. Returns
    /// false (and changes nothing) unless the body is being manipulated.
    pub fn manipulate_to(&mut self, point: Vec2) -> bool {
        if self.mode != BodyMode::Manipulated {
            return false;
        }
        self.phase = phase_from_position(self.center, point, self.direction);
        true
    }

    /// Pointer-up: freeze phase where the drag left it and resume
    /// autonomous advance from there.
    pub fn end_manipulation(&mut self) -> bool {
        if self.mode != BodyMode::Manipulated {
            return false;
        }
        self.mode = BodyMode::Autonomous;
        log::debug!("body {} released at phase {:.4}", self.id, self.phase);
        true
    }
}
