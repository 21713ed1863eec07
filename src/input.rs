//! Input events for the frame driver.
//!
//! Winit delivers window events one at a time between redraws. [`InputQueue`]
//! turns the ones the visualizer cares about into [`InputEvent`]s, in arrival
//! order, and hands them all over when the frame driver drains it at the end
//! of a frame.
//!
//! Winit reports button presses without a position, so the queue tracks the
//! last cursor position and stamps it onto each [`InputEvent::MouseButtonDown`].

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};

/// A user input event in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// The cursor moved to a new position.
    MouseMotion(Vec2),
    /// A mouse button went down at a position.
    MouseButtonDown(Vec2),
}

/// Pending input events since the last drain.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
    /// Last known cursor position in logical pixels.
    cursor: Vec2,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a close request.
    pub fn close_requested(&mut self) {
        self.events.push(InputEvent::Quit);
    }

    /// Record a cursor move.
    pub fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
        self.events.push(InputEvent::MouseMotion(position));
    }

    /// Record a button press at the last cursor position.
    pub fn button_pressed(&mut self) {
        self.events.push(InputEvent::MouseButtonDown(self.cursor));
    }

    /// Process a winit window event.
    ///
    /// Cursor positions arrive in physical pixels and are divided by
    /// `scale_factor` so they line up with drawing coordinates.
    pub fn handle_event(&mut self, event: &WindowEvent, scale_factor: f64) {
        match event {
            WindowEvent::CloseRequested => self.close_requested(),

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(scale_factor);
                self.cursor_moved(Vec2::new(logical.x, logical.y));
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => self.button_pressed(),

            _ => {}
        }
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_uses_last_cursor_position() {
        let mut queue = InputQueue::new();
        queue.cursor_moved(Vec2::new(950.0, 775.0));
        queue.button_pressed();

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::MouseMotion(Vec2::new(950.0, 775.0)),
                InputEvent::MouseButtonDown(Vec2::new(950.0, 775.0)),
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue_and_keeps_cursor() {
        let mut queue = InputQueue::new();
        queue.cursor_moved(Vec2::new(1.0, 2.0));
        queue.close_requested();
        assert_eq!(queue.drain().count(), 2);
        assert_eq!(queue.drain().count(), 0);

        queue.button_pressed();
        assert_eq!(
            queue.drain().collect::<Vec<_>>(),
            vec![InputEvent::MouseButtonDown(Vec2::new(1.0, 2.0))]
        );
    }

    #[test]
    fn test_close_request_event() {
        let mut queue = InputQueue::new();
        queue.handle_event(&WindowEvent::CloseRequested, 1.0);
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![InputEvent::Quit]);
    }
}
