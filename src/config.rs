//! Field layout and timing configuration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::OrbitError;
use crate::orbit::Direction;

/// Everything needed to lay out a field of concentric rings.
///
/// The layout is fixed once a field is built from it: center, spacing and
/// per-ring radii never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Number of rings; one body is created per ring
    pub ring_count: usize,
    /// Radial distance between consecutive rings; ring `i` sits at `i * spacing`
    pub ring_spacing: f32,
    /// Shared center of every ring
    pub center: Vec2,
    /// Direction of travel for every body
    pub direction: Direction,
    /// Seed for initial phases and hues
    pub seed: u64,
    /// Duration of one full revolution in seconds, shared by all bodies
    pub revolution_secs: f32,
    /// Delay before a freshly built body starts revolving, in seconds
    pub placement_delay_secs: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            ring_count: DEFAULT_RING_COUNT,
            ring_spacing: DEFAULT_RING_SPACING,
            center: Vec2::ZERO,
            direction: Direction::Clockwise,
            seed: 0,
            revolution_secs: REVOLUTION_SECS,
            placement_delay_secs: PLACEMENT_DELAY_SECS,
        }
    }
}

impl FieldConfig {
    /// Check the construction preconditions.
    pub fn validate(&self) -> Result<(), OrbitError> {
        if self.ring_count == 0 {
            return Err(OrbitError::Configuration(
                "ring count must be positive".into(),
            ));
        }
        if !(self.ring_spacing.is_finite() && self.ring_spacing > 0.0) {
            return Err(OrbitError::Configuration(format!(
                "ring spacing must be positive and finite, got {}",
                self.ring_spacing
            )));
        }
        if !self.center.is_finite() {
            return Err(OrbitError::Configuration(format!(
                "center must be finite, got {:?}",
                self.center
            )));
        }
        if !(self.revolution_secs.is_finite() && self.revolution_secs > 0.0) {
            return Err(OrbitError::Configuration(format!(
                "revolution period must be positive and finite, got {}",
                self.revolution_secs
            )));
        }
        if !(self.placement_delay_secs.is_finite() && self.placement_delay_secs >= 0.0) {
            return Err(OrbitError::Configuration(format!(
                "placement delay must be non-negative and finite, got {}",
                self.placement_delay_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_ring_count() {
        let config = FieldConfig {
            ring_count: 0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OrbitError::Configuration(_))
        ));
    }

    #[test]
    fn rejects_non_positive_spacing() {
        for spacing in [0.0, -25.0, f32::NAN, f32::INFINITY] {
            let config = FieldConfig {
                ring_spacing: spacing,
                ..FieldConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(OrbitError::Configuration(_))),
                "spacing {spacing} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_positive_period() {
        let config = FieldConfig {
            revolution_secs: 0.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OrbitError::Configuration(_))
        ));
    }
}
