//! [`Canvas`] backed by an egui painter.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};
use glam::Vec2;

use crate::render::Canvas;
use crate::scene::Rgb;

fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

fn pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

/// Draws onto one egui layer using the monospace font.
pub struct EguiCanvas {
    painter: Painter,
    font: FontId,
}

impl EguiCanvas {
    pub fn new(painter: Painter, font_size: f32) -> Self {
        Self {
            painter,
            font: FontId::monospace(font_size),
        }
    }
}

impl Canvas for EguiCanvas {
    fn clear(&mut self, c: Rgb) {
        let screen = self.painter.clip_rect();
        self.painter.rect_filled(screen, 0.0, color(c));
    }

    fn line(&mut self, from: Vec2, to: Vec2, c: Rgb) {
        self.painter
            .line_segment([pos(from), pos(to)], Stroke::new(1.0, color(c)));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, c: Rgb) {
        self.painter.circle_filled(pos(center), radius, color(c));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, c: Rgb) {
        let rect = Rect::from_min_size(pos(origin), egui::vec2(size.x, size.y));
        self.painter.rect_filled(rect, 0.0, color(c));
    }

    fn text_size(&self, text: &str) -> Vec2 {
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), self.font.clone(), Color32::WHITE);
        Vec2::new(galley.size().x, galley.size().y)
    }

    fn text(&mut self, at: Vec2, text: &str, c: Rgb) {
        self.painter
            .text(pos(at), Align2::LEFT_TOP, text, self.font.clone(), color(c));
    }
}
