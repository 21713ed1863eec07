//! Display strings for the numeric readouts.

use crate::oscillator::Motion;

/// Readout lines for the pendulum: degrees, radians, angular velocity, acceleration.
pub fn pendulum_lines(motion: &Motion) -> Vec<String> {
    vec![
        format!("angle (deg) = {:.2}", motion.position.to_degrees()),
        format!("angle (rad) = {:.2}", motion.position),
        format!("v (rad/s) = {:.2}", motion.velocity),
        format!("a = {:.2}", motion.acceleration),
    ]
}

/// Readout lines for the spring: displacement, velocity, acceleration.
pub fn spring_lines(motion: &Motion) -> Vec<String> {
    vec![
        format!("x = {:.2}", motion.position),
        format!("v (px/s) = {:.2}", motion.velocity),
        format!("a = {:.2}", motion.acceleration),
    ]
}

pub fn elapsed(t: f64) -> String {
    format!("t = {:.1}s", t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_6;

    #[test]
    fn test_pendulum_lines() {
        let motion = Motion {
            position: FRAC_PI_6,
            velocity: 0.0,
            acceleration: 0.49,
        };
        assert_eq!(
            pendulum_lines(&motion),
            ["angle (deg) = 30.00", "angle (rad) = 0.52", "v (rad/s) = 0.00", "a = 0.49"]
        );
    }

    #[test]
    fn test_spring_lines_negative_values() {
        let motion = Motion {
            position: -12.346,
            velocity: -70.7,
            acceleration: -6.0,
        };
        assert_eq!(spring_lines(&motion), ["x = -12.35", "v (px/s) = -70.70", "a = -6.00"]);
    }

    #[test]
    fn test_elapsed_one_decimal() {
        assert_eq!(elapsed(0.0), "t = 0.0s");
        assert_eq!(elapsed(5.016), "t = 5.0s");
    }
}
