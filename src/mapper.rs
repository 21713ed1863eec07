//! Physical quantities to screen coordinates.
//!
//! Screen space has its origin at the top-left with y pointing down, so a
//! hanging pendulum at rest sits directly below its pivot. Nothing here clamps:
//! a large amplitude simply draws off-screen.

use glam::Vec2;

use crate::oscillator::{Pendulum, Spring};
use crate::scene::Scene;

/// Screen geometry of one oscillator for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Fixed end of the rod or spring line.
    pub anchor: Vec2,
    /// Center of the bob or ball.
    pub body: Vec2,
    /// Body radius in pixels.
    pub radius: f32,
}

/// Bob position for a pendulum at `angle` radians from vertical.
pub fn pendulum_bob(pivot: Vec2, angle: f64, length: f64, scale: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let reach = length as f32 * scale;
    pivot + Vec2::new(sin as f32 * reach, cos as f32 * reach)
}

/// Ball position for a spring displaced `displacement` pixels from rest.
pub fn spring_ball(equilibrium: Vec2, displacement: f64) -> Vec2 {
    equilibrium + Vec2::new(0.0, displacement as f32)
}

pub fn place_pendulum(scene: &Scene, pendulum: &Pendulum, angle: f64) -> Placement {
    Placement {
        anchor: scene.pendulum_pivot,
        body: pendulum_bob(scene.pendulum_pivot, angle, pendulum.length(), scene.scale),
        radius: pendulum.bob_radius() as f32 * scene.scale,
    }
}

pub fn place_spring(scene: &Scene, spring: &Spring, displacement: f64) -> Placement {
    Placement {
        anchor: scene.spring_anchor,
        body: spring_ball(scene.spring_equilibrium, displacement),
        radius: spring.ball_radius() as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_pendulum_at_rest_hangs_below_pivot() {
        let bob = pendulum_bob(Vec2::new(750.0, 200.0), 0.0, 30.0, 10.0);
        assert_eq!(bob, Vec2::new(750.0, 500.0));
    }

    #[test]
    fn test_pendulum_horizontal() {
        let bob = pendulum_bob(Vec2::new(750.0, 200.0), FRAC_PI_2, 30.0, 10.0);
        assert!((bob.x - 1050.0).abs() < 1e-3);
        assert!((bob.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_spring_ball_not_scaled_or_clamped() {
        let ball = spring_ball(Vec2::new(250.0, 400.0), -1000.0);
        assert_eq!(ball, Vec2::new(250.0, -600.0));
    }

    #[test]
    fn test_placements_use_scene_anchors() {
        let scene = Scene::default();
        let pendulum = Scene::default_pendulum().unwrap();
        let spring = Scene::default_spring().unwrap();

        let p = place_pendulum(&scene, &pendulum, 0.0);
        assert_eq!(p.anchor, scene.pendulum_pivot);
        assert_eq!(p.radius, 10.0);

        let s = place_spring(&scene, &spring, 50.0);
        assert_eq!(s.anchor, scene.spring_anchor);
        assert_eq!(s.body, Vec2::new(250.0, 450.0));
        assert_eq!(s.radius, 10.0);
    }
}
