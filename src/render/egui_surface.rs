//! `DrawSurface`-Adapter für `egui::Painter`.

use super::{DrawSurface, LineStyle};
use glam::Vec2;

/// Zeichnet in einen egui-Painter, verschoben um den Ursprung der Zeichenfläche.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiSurface<'a> {
    /// Bindet den Painter an das Rechteck der Zeichenfläche.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            origin: rect.min,
        }
    }

    fn to_screen(&self, pos: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + pos.x, self.origin.y + pos.y)
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn line_segment(&mut self, from: Vec2, to: Vec2, style: LineStyle) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(style.width, to_color32(style.color)),
        );
    }

    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: [f32; 4]) {
        let rect = egui::Rect::from_min_max(self.to_screen(min), self.to_screen(max));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }
}

/// Wandelt eine RGBA-Farbe (0.0–1.0) in `egui::Color32` um.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}
