//! Ring geometry: phase/position conversions
//!
//! A body's position is polar under the hood: a fixed ring radius plus a
//! phase in [0, 1) turns. These functions convert between that
//! representation and cartesian points. The direction sign is applied here
//! and nowhere else; phase itself always runs forward.

use glam::Vec2;

use super::body::Direction;
use crate::to_radians;

/// Wrap a phase into [0, 1).
///
/// `rem_euclid` can round to exactly 1.0 for inputs a hair below an
/// integer; that case resets to 0 instead of leaking an out-of-range phase.
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Cartesian position of `phase` on the ring of `radius` around `center`.
pub fn position_on_ring(center: Vec2, radius: f32, phase: f32, direction: Direction) -> Vec2 {
    let degrees = phase * 360.0;
    let angle = match direction {
        Direction::Clockwise => to_radians(degrees),
        Direction::CounterClockwise => -to_radians(degrees),
    };
    center + radius * Vec2::new(angle.cos(), angle.sin())
}

/// Phase whose on-ring position shares a bearing from `center` with `point`.
///
/// Only the bearing matters: a point off the ring (even one right next to
/// the center) is projected onto the ring by angle, not by nearest-point
/// distance. Inverse of [`position_on_ring`] up to floating error for any
/// point on the ring.
pub fn phase_from_position(center: Vec2, point: Vec2, direction: Direction) -> f32 {
    let bearing = (point.y - center.y).atan2(point.x - center.x);
    let turns = bearing / std::f32::consts::TAU;
    match direction {
        Direction::Clockwise => wrap_phase(turns),
        Direction::CounterClockwise => wrap_phase(-turns),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    /// Distance between two phases on the unit circle (0 and 1 coincide).
    fn circular_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    fn assert_vec2_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-3,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn quarter_turn_positions() {
        let center = Vec2::ZERO;
        // phase 0.25 = 90 degrees: straight "up" in y-grows-down terms
        assert_vec2_close(
            position_on_ring(center, 100.0, 0.25, Direction::Clockwise),
            Vec2::new(0.0, 100.0),
        );
        assert_vec2_close(
            position_on_ring(center, 100.0, 0.0, Direction::Clockwise),
            Vec2::new(100.0, 0.0),
        );
        assert_vec2_close(
            position_on_ring(center, 100.0, 0.25, Direction::CounterClockwise),
            Vec2::new(0.0, -100.0),
        );
    }

    #[test]
    fn offset_center() {
        let center = Vec2::new(100.0, 100.0);
        assert_vec2_close(
            position_on_ring(center, 50.0, 0.5, Direction::Clockwise),
            Vec2::new(50.0, 100.0),
        );
    }

    #[test]
    fn wrap_phase_bounds() {
        assert_eq!(wrap_phase(0.0), 0.0);
        assert_eq!(wrap_phase(1.0), 0.0);
        assert!((wrap_phase(1.25) - 0.25).abs() < EPS);
        assert!((wrap_phase(-0.25) - 0.75).abs() < EPS);
        assert!((wrap_phase(3.5) - 0.5).abs() < EPS);
        // a hair below zero rounds up to 1.0 inside rem_euclid; must clamp
        let p = wrap_phase(-1e-9);
        assert!((0.0..1.0).contains(&p));
    }

    #[test]
    fn off_ring_points_project_by_angle() {
        let center = Vec2::ZERO;
        // Same bearing, wildly different radii: identical phase.
        let near = phase_from_position(center, Vec2::new(0.1, 0.1), Direction::Clockwise);
        let far = phase_from_position(center, Vec2::new(500.0, 500.0), Direction::Clockwise);
        assert!(circular_distance(near, far) < EPS);
        assert!(circular_distance(near, 0.125) < EPS); // 45 degrees
    }

    #[test]
    fn degree_conversions() {
        assert!((crate::to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((crate::to_degrees(std::f32::consts::PI) - 180.0).abs() < 1e-4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_recovers_phase(
                phase in 0.0f32..1.0,
                radius in 1.0f32..500.0,
                cx in -500.0f32..500.0,
                cy in -500.0f32..500.0,
                clockwise in proptest::bool::ANY,
            ) {
                let direction = if clockwise {
                    Direction::Clockwise
                } else {
                    Direction::CounterClockwise
                };
                let center = Vec2::new(cx, cy);
                let point = position_on_ring(center, radius, phase, direction);
                let recovered = phase_from_position(center, point, direction);
                prop_assert!((0.0..1.0).contains(&recovered));
                prop_assert!(
                    circular_distance(recovered, phase) < 1e-3,
                    "phase {phase} round-tripped to {recovered}"
                );
            }

            #[test]
            fn wrap_phase_always_in_unit_interval(x in -1e6f32..1e6) {
                let wrapped = wrap_phase(x);
                prop_assert!((0.0..1.0).contains(&wrapped), "wrap({x}) = {wrapped}");
            }

            #[test]
            fn bearing_ignores_radius(
                phase in 0.0f32..1.0,
                scale in 0.01f32..100.0,
            ) {
                let center = Vec2::new(50.0, 50.0);
                let on_ring = position_on_ring(center, 100.0, phase, Direction::Clockwise);
                // Slide the point along its bearing; phase must not move.
                let scaled = center + (on_ring - center) * scale;
                let recovered = phase_from_position(center, scaled, Direction::Clockwise);
                prop_assert!(circular_distance(recovered, phase) < 1e-3);
            }
        }
    }
}
