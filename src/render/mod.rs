//! Frame-Rendering: Linien, Spiegel-Overlay, Trennlinie und Pane-Abdunklung.
//!
//! Das Zeichnen läuft gegen das [`DrawSurface`]-Trait, damit die Szene ohne
//! egui testbar bleibt. [`EguiSurface`] bindet es an einen `egui::Painter`.

mod egui_surface;
mod frame;

pub use crate::shared::RenderScene;
pub use egui_surface::{to_color32, EguiSurface};
pub use frame::render_frame;

use glam::Vec2;

/// Ziel für Zeichenaufrufe eines Frames (Flächenkoordinaten in Pixeln).
pub trait DrawSurface {
    /// Zeichnet ein Liniensegment.
    fn line_segment(&mut self, from: Vec2, to: Vec2, style: LineStyle);
    /// Füllt ein achsenparalleles Rechteck.
    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: [f32; 4]);
}

/// Linienstärke und Farbe eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Linienstärke in Pixeln
    pub width: f32,
    /// RGBA-Farbe (0.0–1.0)
    pub color: [f32; 4],
}

impl LineStyle {
    /// Erstellt einen Linienstil.
    pub fn new(width: f32, color: [f32; 4]) -> Self {
        Self { width, color }
    }
}
