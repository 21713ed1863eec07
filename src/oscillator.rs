//! Closed-form simple harmonic motion models.
//!
//! Both oscillators are evaluated analytically from elapsed time; nothing is
//! stepped or integrated, so evaluating at any `t` is independent of every
//! previous evaluation.
//!
//! # Example
//!
//! ```
//! use pendulum_sim::oscillator::{Oscillator, Pendulum};
//!
//! let pendulum = Pendulum::new(30.0, std::f64::consts::FRAC_PI_6, 1.0).unwrap();
//! let motion = pendulum.evaluate(pendulum.period() / 4.0);
//! assert!((motion.position - std::f64::consts::FRAC_PI_6).abs() < 1e-9);
//! ```

use std::f64::consts::TAU;

use crate::error::ModelError;

/// Gravitational acceleration used for the pendulum period (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Instantaneous kinematic state of an oscillator.
///
/// `position` is an angle in radians for the pendulum and a displacement in
/// pixels for the spring; `velocity` and `acceleration` use matching units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

/// A periodic system evaluated in closed form.
pub trait Oscillator {
    /// Duration of one full cycle in seconds.
    fn period(&self) -> f64;

    /// Signed amplitude; `|position| <= |amplitude|` at every `t`.
    fn amplitude(&self) -> f64;

    /// Angular frequency `ω = 2π / period`.
    fn angular_frequency(&self) -> f64 {
        TAU / self.period()
    }

    /// Evaluate the motion at elapsed time `t` (seconds).
    fn evaluate(&self, t: f64) -> Motion {
        let omega = self.angular_frequency();
        let (sin, cos) = (omega * t).sin_cos();
        let amplitude = self.amplitude();

        Motion {
            position: amplitude * sin,
            velocity: amplitude * omega * cos,
            acceleration: omega * omega * amplitude * sin,
        }
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameter { name, value })
    }
}

/// Small-angle pendulum swinging about a fixed pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    length: f64,
    max_angle: f64,
    bob_radius: f64,
    period: f64,
}

impl Pendulum {
    /// Create a pendulum of rod `length` swinging with amplitude `max_angle`
    /// (radians). Lengths are in physical units and scaled to pixels at
    /// render time.
    ///
    /// A negative `max_angle` starts the swing toward negative angles.
    pub fn new(length: f64, max_angle: f64, bob_radius: f64) -> Result<Self, ModelError> {
        let length = require_positive("length", length)?;
        let bob_radius = require_positive("bob_radius", bob_radius)?;
        if !max_angle.is_finite() {
            return Err(ModelError::InvalidParameter { name: "max_angle", value: max_angle });
        }

        Ok(Self {
            length,
            max_angle,
            bob_radius,
            period: TAU * (length / GRAVITY).sqrt(),
        })
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    #[inline]
    pub fn bob_radius(&self) -> f64 {
        self.bob_radius
    }
}

impl Oscillator for Pendulum {
    fn period(&self) -> f64 {
        self.period
    }

    fn amplitude(&self) -> f64 {
        self.max_angle
    }
}

/// Mass hanging from a spring, oscillating along the vertical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    amplitude: f64,
    mass: f64,
    stiffness: f64,
    ball_radius: f64,
    period: f64,
}

impl Spring {
    /// Create a spring oscillator. `amplitude` and `ball_radius` are already
    /// in pixels.
    pub fn new(amplitude: f64, mass: f64, stiffness: f64, ball_radius: f64) -> Result<Self, ModelError> {
        let mass = require_positive("mass", mass)?;
        let stiffness = require_positive("stiffness", stiffness)?;
        let amplitude = require_positive("amplitude", amplitude)?;
        let ball_radius = require_positive("ball_radius", ball_radius)?;

        Ok(Self {
            amplitude,
            mass,
            stiffness,
            ball_radius,
            period: TAU * (mass / stiffness).sqrt(),
        })
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[inline]
    pub fn ball_radius(&self) -> f64 {
        self.ball_radius
    }
}

impl Oscillator for Spring {
    fn period(&self) -> f64 {
        self.period
    }

    fn amplitude(&self) -> f64 {
        self.amplitude
    }
}
