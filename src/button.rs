//! The reset control.
//!
//! Hover and click are tested independently against the down-event's own
//! position: a click inside the rectangle fires even if no motion event has
//! moved the button into [`ButtonState::Hovered`] first.

use glam::Vec2;

use crate::scene::{Rgb, TEXT_COLOR};

/// Visual state of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Hovered,
}

/// A labelled screen rectangle with idle/hover colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    idle_color: Rgb,
    hover_color: Rgb,
    label: String,
    label_color: Rgb,
    state: ButtonState,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        idle_color: Rgb,
        hover_color: Rgb,
        label: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            idle_color,
            hover_color,
            label: label.into(),
            label_color: TEXT_COLOR,
            state: ButtonState::Idle,
        }
    }

    /// Override the label color (white by default).
    pub fn with_label_color(mut self, color: Rgb) -> Self {
        self.label_color = color;
        self
    }

    /// Strict interior test: points on any edge are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }

    /// Update hover state from the latest cursor position.
    pub fn on_motion(&mut self, point: Vec2) -> ButtonState {
        self.state = if self.contains(point) {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        };
        self.state
    }

    /// Whether a button-down at `point` activates this control.
    pub fn on_press(&self, point: Vec2) -> bool {
        self.contains(point)
    }

    #[inline]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Fill color for the current state.
    pub fn color(&self) -> Rgb {
        match self.state {
            ButtonState::Idle => self.idle_color,
            ButtonState::Hovered => self.hover_color,
        }
    }

    /// `[x, y, width, height]`
    #[inline]
    pub fn rect(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn label_color(&self) -> Rgb {
        self.label_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset_button() -> Button {
        Button::new(900.0, 750.0, 100.0, 50.0, Rgb(15, 15, 15), Rgb(30, 30, 30), "reset")
    }

    #[test]
    fn test_edges_are_outside() {
        let button = reset_button();
        assert!(!button.contains(Vec2::new(900.0, 775.0)));
        assert!(!button.contains(Vec2::new(1000.0, 775.0)));
        assert!(!button.contains(Vec2::new(950.0, 750.0)));
        assert!(!button.contains(Vec2::new(950.0, 800.0)));
    }

    #[test]
    fn test_one_unit_inside_each_edge() {
        let button = reset_button();
        assert!(button.contains(Vec2::new(901.0, 775.0)));
        assert!(button.contains(Vec2::new(999.0, 775.0)));
        assert!(button.contains(Vec2::new(950.0, 751.0)));
        assert!(button.contains(Vec2::new(950.0, 799.0)));
    }

    #[test]
    fn test_hover_transitions() {
        let mut button = reset_button();
        assert_eq!(button.state(), ButtonState::Idle);
        assert_eq!(button.color(), Rgb(15, 15, 15));

        assert_eq!(button.on_motion(Vec2::new(950.0, 775.0)), ButtonState::Hovered);
        assert_eq!(button.color(), Rgb(30, 30, 30));

        assert_eq!(button.on_motion(Vec2::new(899.0, 775.0)), ButtonState::Idle);
        assert_eq!(button.color(), Rgb(15, 15, 15));
    }

    #[test]
    fn test_press_ignores_hover_state() {
        let button = reset_button();
        assert_eq!(button.state(), ButtonState::Idle);
        assert!(button.on_press(Vec2::new(950.0, 775.0)));
        assert!(!button.on_press(Vec2::new(10.0, 10.0)));
    }
}
