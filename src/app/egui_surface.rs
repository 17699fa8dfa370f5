//! [`Surface`] implementation over an egui painter.

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke};

use crate::render::surface::Surface;

/// A drawing surface backed by an [`egui::Painter`], covering `rect`.
///
/// Surface coordinates are local to the rect: (0, 0) is the rect's
/// top-left corner regardless of where the widget sits in the window.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.rect.width(), self.rect.height())
    }

    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, CornerRadius::ZERO, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        );
    }

    fn filled_rect(&mut self, rect: Rect, color: Color32) {
        let screen = Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_filled(screen, CornerRadius::ZERO, color);
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            anchor,
            text,
            FontId::monospace(size),
            color,
        );
    }
}
