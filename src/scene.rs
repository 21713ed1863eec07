//! Scene layout and compile-time configuration.
//!
//! Everything here is fixed at startup: window size, pivots, colors, the
//! pixel scale and the initial oscillator parameters. A [`Scene`] value is
//! built once and passed by reference to the renderer and frame driver.

use std::f64::consts::FRAC_PI_6;

use glam::Vec2;

use crate::button::Button;
use crate::error::ModelError;
use crate::oscillator::{Pendulum, Spring};

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 800;
pub const WINDOW_TITLE: &str = "Pendulum sim";
pub const FRAME_RATE: u32 = 60;
pub const FONT_SIZE: f32 = 21.0;
/// Pixels per pendulum length unit.
pub const SCALE: f32 = 10.0;
pub const SIM_SPEED: f64 = 1.0;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

pub const BACKGROUND: Rgb = Rgb(33, 35, 41);
pub const ROD_COLOR: Rgb = Rgb::BLACK;
pub const BODY_COLOR: Rgb = Rgb::WHITE;
pub const TEXT_COLOR: Rgb = Rgb::WHITE;
pub const BUTTON_IDLE: Rgb = Rgb(15, 15, 15);
pub const BUTTON_HOVER: Rgb = Rgb(30, 30, 30);

/// Fixed screen layout shared by the renderer and the frame driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub frame_rate: u32,
    pub font_size: f32,
    pub scale: f32,
    pub speed: f64,
    pub background: Rgb,
    pub rod_color: Rgb,
    pub body_color: Rgb,
    pub text_color: Rgb,
    /// Pivot the pendulum rod hangs from.
    pub pendulum_pivot: Vec2,
    /// Top end of the spring line.
    pub spring_anchor: Vec2,
    /// Rest position of the spring ball (zero displacement).
    pub spring_equilibrium: Vec2,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            frame_rate: FRAME_RATE,
            font_size: FONT_SIZE,
            scale: SCALE,
            speed: SIM_SPEED,
            background: BACKGROUND,
            rod_color: ROD_COLOR,
            body_color: BODY_COLOR,
            text_color: TEXT_COLOR,
            pendulum_pivot: Vec2::new(width - width / 4.0, height / 3.0),
            spring_anchor: Vec2::new(width / 4.0, height / 3.0),
            spring_equilibrium: Vec2::new(width / 4.0, height / 2.0),
        }
    }

    /// Height of one readout line.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.font_size
    }

    /// The reset button in the bottom-right corner.
    pub fn reset_button(&self) -> Button {
        Button::new(self.width - 100.0, self.height - 50.0, 100.0, 50.0, BUTTON_IDLE, BUTTON_HOVER, "reset")
            .with_label_color(self.text_color)
    }

    /// Default pendulum: 30 units long, 30° amplitude.
    pub fn default_pendulum() -> Result<Pendulum, ModelError> {
        Pendulum::new(30.0, FRAC_PI_6, 1.0)
    }

    /// Default spring: 100 px amplitude, mass 2, stiffness 1.
    pub fn default_spring() -> Result<Spring, ModelError> {
        Spring::new(100.0, 2.0, 1.0, 10.0)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
    }
}
