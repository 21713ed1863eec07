//! # pendulum-sim
//!
//! A real-time visualizer for two independent simple harmonic oscillators:
//! a small-angle pendulum and a mass on a spring, both driven by one shared
//! simulation clock and drawn at a fixed frame rate. A reset button in the
//! corner sets the clock back to zero.
//!
//! ## Layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`oscillator`] | Closed-form motion: `t → (position, velocity, acceleration)` |
//! | [`time`] | Simulation [`Clock`] and wall-clock [`time::FramePacer`] |
//! | [`mapper`] | Physical values to screen pixels |
//! | [`readout`] | Numeric readout strings |
//! | [`render`] | Draw calls onto a [`Canvas`] |
//! | [`button`] | Reset control with strict hit-testing |
//! | [`driver`] | One frame of update/render plus input dispatch |
//!
//! Everything above runs without a window. The windowed runner in [`run`]
//! paints through egui on a wgpu surface.
//!
//! ## Headless example
//!
//! ```
//! use pendulum_sim::prelude::*;
//!
//! let mut driver = FrameDriver::with_defaults().unwrap();
//! let mut canvas = RecordingCanvas::new(driver.scene().font_size);
//!
//! driver.render_frame(&mut canvas);
//! assert!(canvas.texts().contains(&"t = 0.0s"));
//!
//! let control = driver.handle_events([InputEvent::Quit]);
//! assert_eq!(control, LoopControl::Exit);
//! ```

mod app;
pub mod button;
pub mod driver;
pub mod error;
mod gpu;
pub mod input;
pub mod mapper;
pub mod oscillator;
pub mod readout;
pub mod render;
pub mod scene;
pub mod time;

pub use app::run;
pub use button::{Button, ButtonState};
pub use driver::{FrameDriver, LoopControl};
pub use error::{GpuError, ModelError, SimulationError};
pub use input::{InputEvent, InputQueue};
pub use oscillator::{Motion, Oscillator, Pendulum, Spring, GRAVITY};
pub use render::{Canvas, DrawCommand, RecordingCanvas};
pub use scene::{Rgb, Scene};
pub use time::Clock;

/// Common imports.
pub mod prelude {
    pub use crate::button::{Button, ButtonState};
    pub use crate::driver::{FrameDriver, LoopControl};
    pub use crate::input::InputEvent;
    pub use crate::oscillator::{Motion, Oscillator, Pendulum, Spring};
    pub use crate::render::{Canvas, RecordingCanvas};
    pub use crate::scene::{Rgb, Scene};
    pub use crate::time::Clock;
    pub use glam::Vec2;
}
