//! Drawing the scene onto a [`Canvas`].
//!
//! The renderer holds no state. Each function takes model output that was
//! already evaluated for this frame and issues draw calls; the frame driver
//! clears the canvas and redraws everything every frame.

use glam::Vec2;

use crate::button::Button;
use crate::mapper::{self, Placement};
use crate::oscillator::{Motion, Pendulum, Spring};
use crate::readout;
use crate::scene::{Rgb, Scene};

/// Left margin of the spring readout block.
const SPRING_READOUT_X: f32 = 15.0;
/// Width of the pendulum readout block, in font sizes.
const PENDULUM_READOUT_COLUMNS: f32 = 12.0;
/// Top margin of both readout blocks.
const READOUT_TOP: f32 = 4.0;

/// A drawable surface with a monospace text service.
///
/// Coordinates are pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    /// Draw a 1 px line.
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb);

    /// Size of `text` when drawn with [`Canvas::text`].
    fn text_size(&self, text: &str) -> Vec2;

    /// Draw anti-aliased text with its top-left corner at `pos`.
    fn text(&mut self, pos: Vec2, text: &str, color: Rgb);
}

fn draw_body(canvas: &mut impl Canvas, scene: &Scene, placement: &Placement) {
    canvas.line(placement.body, placement.anchor, scene.rod_color);
    canvas.fill_circle(placement.body, placement.radius, scene.body_color);
}

/// Draw a block of left-aligned lines starting at `x`.
pub fn draw_readouts(canvas: &mut impl Canvas, scene: &Scene, x: f32, lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        let y = scene.line_height() * i as f32 + READOUT_TOP;
        canvas.text(Vec2::new(x, y), line, scene.text_color);
    }
}

/// Readouts, rod and bob for the pendulum.
pub fn draw_pendulum(canvas: &mut impl Canvas, scene: &Scene, pendulum: &Pendulum, motion: &Motion) {
    let x = scene.width - scene.font_size * PENDULUM_READOUT_COLUMNS;
    draw_readouts(canvas, scene, x, &readout::pendulum_lines(motion));

    let placement = mapper::place_pendulum(scene, pendulum, motion.position);
    draw_body(canvas, scene, &placement);
}

/// Readouts, line and ball for the spring.
pub fn draw_spring(canvas: &mut impl Canvas, scene: &Scene, spring: &Spring, motion: &Motion) {
    draw_readouts(canvas, scene, SPRING_READOUT_X, &readout::spring_lines(motion));

    let placement = mapper::place_spring(scene, spring, motion.position);
    draw_body(canvas, scene, &placement);
}

/// Button fill in its current color with the label centered.
pub fn draw_button(canvas: &mut impl Canvas, button: &Button) {
    canvas.fill_rect(button.origin(), button.size(), button.color());

    let text_size = canvas.text_size(button.label());
    let pos = button.origin() + (button.size() - text_size) / 2.0;
    canvas.text(pos, button.label(), button.label_color());
}

/// Elapsed-time readout in the bottom-left corner.
pub fn draw_elapsed(canvas: &mut impl Canvas, scene: &Scene, t: f64) {
    let pos = Vec2::new(0.0, scene.height - scene.font_size);
    canvas.text(pos, &readout::elapsed(t), scene.text_color);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Line { from: Vec2, to: Vec2, color: Rgb },
    Circle { center: Vec2, radius: f32, color: Rgb },
    Rect { origin: Vec2, size: Vec2, color: Rgb },
    Text { pos: Vec2, text: String, color: Rgb },
}

/// Canvas that records draw calls instead of rasterizing them.
///
/// Text is measured as a fixed-advance monospace font at `font_size`.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub font_size: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            commands: Vec::new(),
        }
    }

    /// All text drawn so far, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position of the first text command equal to `text`.
    pub fn text_pos(&self, text: &str) -> Option<Vec2> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { pos, text: t, .. } if t == text => Some(*pos),
            _ => None,
        })
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::Rect { origin, size, color });
    }

    fn text_size(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.font_size * 0.6, self.font_size)
    }

    fn text(&mut self, pos: Vec2, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillator::Oscillator;

    #[test]
    fn test_pendulum_readouts_right_block() {
        let scene = Scene::default();
        let pendulum = Scene::default_pendulum().unwrap();
        let mut canvas = RecordingCanvas::new(scene.font_size);

        draw_pendulum(&mut canvas, &scene, &pendulum, &pendulum.evaluate(0.0));

        assert_eq!(canvas.text_pos("angle (deg) = 0.00"), Some(Vec2::new(748.0, 4.0)));
        assert_eq!(canvas.text_pos("angle (rad) = 0.00"), Some(Vec2::new(748.0, 25.0)));
        assert_eq!(canvas.texts().len(), 4);
    }

    #[test]
    fn test_pendulum_rod_then_bob() {
        let scene = Scene::default();
        let pendulum = Scene::default_pendulum().unwrap();
        let mut canvas = RecordingCanvas::new(scene.font_size);

        draw_pendulum(&mut canvas, &scene, &pendulum, &pendulum.evaluate(0.0));

        let bob = scene.pendulum_pivot + Vec2::new(0.0, 300.0);
        let shapes: Vec<_> = canvas
            .commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Text { .. }))
            .cloned()
            .collect();
        assert_eq!(
            shapes,
            vec![
                DrawCommand::Line { from: bob, to: scene.pendulum_pivot, color: Rgb::BLACK },
                DrawCommand::Circle { center: bob, radius: 10.0, color: Rgb::WHITE },
            ]
        );
    }

    #[test]
    fn test_spring_readouts_left_block() {
        let scene = Scene::default();
        let spring = Scene::default_spring().unwrap();
        let mut canvas = RecordingCanvas::new(scene.font_size);

        draw_spring(&mut canvas, &scene, &spring, &spring.evaluate(0.0));

        assert_eq!(canvas.texts(), ["x = 0.00", "v (px/s) = 70.71", "a = 0.00"]);
        assert_eq!(canvas.text_pos("x = 0.00"), Some(Vec2::new(15.0, 4.0)));
        assert_eq!(canvas.text_pos("a = 0.00"), Some(Vec2::new(15.0, 46.0)));
    }

    #[test]
    fn test_button_label_centered() {
        let scene = Scene::default();
        let button = scene.reset_button();
        let mut canvas = RecordingCanvas::new(20.0);

        draw_button(&mut canvas, &button);

        // "reset" is 5 * 12 px wide, 20 px tall
        let pos = canvas.text_pos("reset").unwrap();
        assert!((pos - Vec2::new(920.0, 765.0)).length() < 1e-3);
        assert!(matches!(
            canvas.commands[0],
            DrawCommand::Rect { color: Rgb(15, 15, 15), .. }
        ));
    }

    #[test]
    fn test_elapsed_bottom_left() {
        let scene = Scene::default();
        let mut canvas = RecordingCanvas::new(scene.font_size);
        draw_elapsed(&mut canvas, &scene, 2.0);
        assert_eq!(canvas.text_pos("t = 2.0s"), Some(Vec2::new(0.0, 779.0)));
    }
}
