//! The drawable-surface capability the renderer draws through.

use egui::{Align2, Color32, Pos2, Rect};

/// Primitive draw operations on a rectangular pixel surface.
///
/// The core never creates or owns a surface; the front-end passes one in
/// per frame (see `EguiSurface`), and tests substitute a recording double.
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait Surface {
    /// Current drawable size as `(width, height)` in pixels.
    fn size(&self) -> (f32, f32);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color32);

    /// Stroke a straight line segment.
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);

    /// Fill an axis-aligned rectangle.
    fn filled_rect(&mut self, rect: Rect, color: Color32);

    /// Draw a single line of text anchored at `pos`.
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32);
}
