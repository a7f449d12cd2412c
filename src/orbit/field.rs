//! The field: concentric rings, their bodies, and event routing
//!
//! The field translates one [`FieldConfig`] into N rings and N bodies (one
//! per ring, in construction order) and routes per-body host events to the
//! right state machine. Hit-testing stays in the host; the field only needs
//! a body id.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Direction, OrbitBody};
use super::events::FieldEvents;
use crate::config::FieldConfig;
use crate::error::OrbitError;

/// One fixed circular path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ring {
    /// 1-based construction index; ring `i` holds body `i`
    pub index: usize,
    /// Distance from the shared center
    pub radius: f32,
    pub direction: Direction,
}

/// A set of concentric rings with one revolving body per ring.
///
/// Layout (center, spacing, radii) is fixed at construction. Ring and body
/// order is construction order and stays stable for the field's lifetime.
pub struct OrbitField<E: FieldEvents> {
    config: FieldConfig,
    rings: Vec<Ring>,
    bodies: Vec<OrbitBody>,
    events: E,
    destroyed: bool,
}

impl<E: FieldEvents> OrbitField<E> {
    /// Build rings and bodies from `config`.
    ///
    /// Ring `i` gets radius `i * spacing`; body `i` gets that ring, a
    /// random initial phase and hue from the seeded generator, and id `i`.
    /// Fails atomically on a bad configuration; no partially built field
    /// ever escapes.
    pub fn new(config: FieldConfig, events: E) -> Result<Self, OrbitError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        // Body math runs in turns of the revolution period.
        let placement_delay = config.placement_delay_secs / config.revolution_secs;

        let mut rings = Vec::with_capacity(config.ring_count);
        let mut bodies = Vec::with_capacity(config.ring_count);
        for index in 1..=config.ring_count {
            let ring = Ring {
                index,
                radius: index as f32 * config.ring_spacing,
                direction: config.direction,
            };
            let body = OrbitBody::new(
                index as u32,
                config.center,
                ring.radius,
                ring.direction,
                rng.random::<f32>(),
                rng.random::<f32>(),
                placement_delay,
            )?;
            rings.push(ring);
            bodies.push(body);
        }

        log::info!(
            "field created: {} rings, spacing {}, center {}, seed {}",
            config.ring_count,
            config.ring_spacing,
            config.center,
            config.seed
        );

        Ok(Self {
            config,
            rings,
            bodies,
            events,
            destroyed: false,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Rings in construction order (index 1..=N).
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Bodies in construction order; body `i` rides ring `i`.
    pub fn bodies(&self) -> &[OrbitBody] {
        &self.bodies
    }

    pub fn body(&self, id: u32) -> Result<&OrbitBody, OrbitError> {
        self.bodies
            .iter()
            .find(|b| b.id == id)
            .ok_or(OrbitError::UnknownBody(id))
    }

    /// Current cartesian position of one body (pull-style query).
    pub fn position(&self, id: u32) -> Result<Vec2, OrbitError> {
        Ok(self.body(id)?.position())
    }

    /// Advance one body by `dt_secs` of host frame time.
    pub fn tick(&mut self, id: u32, dt_secs: f32) -> Result<(), OrbitError> {
        let dt = dt_secs / self.config.revolution_secs;
        Self::body_mut(&mut self.bodies, id)?.tick(dt);
        Ok(())
    }

    /// Advance every body by `dt_secs`. Convenience for hosts driving the
    /// whole field from a single frame clock.
    pub fn tick_all(&mut self, dt_secs: f32) {
        let dt = dt_secs / self.config.revolution_secs;
        for body in &mut self.bodies {
            body.tick(dt);
        }
    }

    /// Pointer-down on a body: pause its revolution and fire the begin
    /// callback. A no-op (without callback) if the body isn't revolving.
    pub fn pointer_down(&mut self, id: u32) -> Result<(), OrbitError> {
        let began = Self::body_mut(&mut self.bodies, id)?.begin_manipulation();
        if began {
            self.events.on_manipulation_begin(id);
        }
        Ok(())
    }

    /// Pointer-move: re-derive the body's phase from the pointer's bearing
    /// and fire the move callback. A no-op if the body isn't manipulated.
    pub fn pointer_move(&mut self, id: u32, point: Vec2) -> Result<(), OrbitError> {
        let moved = Self::body_mut(&mut self.bodies, id)?.manipulate_to(point);
        if moved {
            self.events.on_manipulation_move(id);
        }
        Ok(())
    }

    /// Pointer-up: freeze the body's phase where the drag left it, resume
    /// revolution from there, and fire the end callback.
    pub fn pointer_up(&mut self, id: u32) -> Result<(), OrbitError> {
        let ended = Self::body_mut(&mut self.bodies, id)?.end_manipulation();
        if ended {
            self.events.on_manipulation_end(id);
        }
        Ok(())
    }

    /// Tear the field down: drop every body and with it its share of the
    /// tick stream. Idempotent; per-body calls afterwards report
    /// [`OrbitError::UnknownBody`], and no phase can mutate again.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.bodies.clear();
        self.rings.clear();
        log::info!("field destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn body_mut(bodies: &mut [OrbitBody], id: u32) -> Result<&mut OrbitBody, OrbitError> {
        bodies
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(OrbitError::UnknownBody(id))
    }
}
