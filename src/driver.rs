//! The per-frame update/render loop body.
//!
//! [`FrameDriver`] owns every piece of mutable state: the clock, both
//! oscillators and the reset button. The windowed app calls
//! [`FrameDriver::render_frame`] once per paced frame and then
//! [`FrameDriver::handle_events`] with everything that arrived meanwhile.

use crate::button::Button;
use crate::error::ModelError;
use crate::input::InputEvent;
use crate::oscillator::{Oscillator, Pendulum, Spring};
use crate::render::{self, Canvas};
use crate::scene::Scene;
use crate::time::Clock;

/// Whether the loop should keep running after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct FrameDriver {
    scene: Scene,
    clock: Clock,
    pendulum: Pendulum,
    spring: Spring,
    button: Button,
}

impl FrameDriver {
    pub fn new(scene: Scene, pendulum: Pendulum, spring: Spring) -> Self {
        let clock = Clock::new(scene.speed);
        let button = scene.reset_button();
        Self {
            scene,
            clock,
            pendulum,
            spring,
            button,
        }
    }

    /// Driver for the default scene and oscillators.
    pub fn with_defaults() -> Result<Self, ModelError> {
        Ok(Self::new(Scene::default(), Scene::default_pendulum()?, Scene::default_spring()?))
    }

    /// Draw one frame and advance the clock.
    ///
    /// Oscillators are drawn at the time before the advance; the elapsed
    /// readout shows the time after it.
    pub fn render_frame(&mut self, canvas: &mut impl Canvas) {
        canvas.clear(self.scene.background);

        let t = self.clock.elapsed();
        let pendulum_motion = self.pendulum.evaluate(t);
        let spring_motion = self.spring.evaluate(t);
        render::draw_pendulum(canvas, &self.scene, &self.pendulum, &pendulum_motion);
        render::draw_spring(canvas, &self.scene, &self.spring, &spring_motion);
        render::draw_button(canvas, &self.button);

        let t = self.clock.advance(self.scene.frame_rate);
        render::draw_elapsed(canvas, &self.scene, t);
    }

    /// Process pending input in arrival order.
    ///
    /// A quit event does not stop the remaining events from being handled;
    /// the loop just ends after this frame.
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) -> LoopControl {
        let mut control = LoopControl::Continue;
        for event in events {
            match event {
                InputEvent::Quit => {
                    tracing::info!("quit requested");
                    control = LoopControl::Exit;
                }
                InputEvent::MouseMotion(pos) => {
                    self.button.on_motion(pos);
                }
                InputEvent::MouseButtonDown(pos) => {
                    if self.button.on_press(pos) {
                        tracing::debug!(t = self.clock.elapsed(), "clock reset");
                        self.clock.reset();
                    }
                }
            }
        }
        control
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[inline]
    pub fn button(&self) -> &Button {
        &self.button
    }

    #[inline]
    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    #[inline]
    pub fn spring(&self) -> &Spring {
        &self.spring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonState;
    use crate::render::{DrawCommand, RecordingCanvas};
    use glam::Vec2;

    #[test]
    fn test_frame_starts_with_clear_and_advances_clock() {
        let mut driver = FrameDriver::with_defaults().unwrap();
        let mut canvas = RecordingCanvas::new(driver.scene().font_size);

        driver.render_frame(&mut canvas);

        assert_eq!(canvas.commands[0], DrawCommand::Clear(driver.scene().background));
        assert!((driver.clock().elapsed() - 1.0 / 60.0).abs() < 1e-12);
        assert_eq!(canvas.texts().last().copied(), Some("t = 0.0s"));
    }

    #[test]
    fn test_click_resets_clock() {
        let mut driver = FrameDriver::with_defaults().unwrap();
        let mut canvas = RecordingCanvas::new(driver.scene().font_size);
        for _ in 0..300 {
            driver.render_frame(&mut canvas);
        }
        assert!((driver.clock().elapsed() - 5.0).abs() < 1e-9);

        let control = driver.handle_events([InputEvent::MouseButtonDown(Vec2::new(950.0, 775.0))]);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(driver.clock().elapsed(), 0.0);
    }

    #[test]
    fn test_click_outside_keeps_clock() {
        let mut driver = FrameDriver::with_defaults().unwrap();
        let mut canvas = RecordingCanvas::new(driver.scene().font_size);
        driver.render_frame(&mut canvas);

        driver.handle_events([InputEvent::MouseButtonDown(Vec2::new(900.0, 775.0))]);
        assert!(driver.clock().elapsed() > 0.0);
    }

    #[test]
    fn test_quit_still_processes_later_events() {
        let mut driver = FrameDriver::with_defaults().unwrap();
        let control = driver.handle_events([
            InputEvent::Quit,
            InputEvent::MouseMotion(Vec2::new(950.0, 775.0)),
        ]);
        assert_eq!(control, LoopControl::Exit);
        assert_eq!(driver.button().state(), ButtonState::Hovered);
    }
}
