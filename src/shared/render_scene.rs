//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::DrawingOptions;
use crate::core::{DrawingPhase, Pane, Stroke, SurfaceLayout};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Phase der Session in diesem Frame
    pub phase: DrawingPhase,
    /// Flächengröße in Pixeln
    pub layout: SurfaceLayout,
    /// Linke Linie (Pane-Offsets)
    pub left_stroke: Stroke,
    /// Rechte Linie (Pane-Offsets)
    pub right_stroke: Stroke,
    /// Pane, in der gerade gezeichnet wird bzw. als nächstes gezeichnet wird
    pub active_pane: Option<Pane>,
    /// Laufzeit-Optionen für Farben und Breiten
    pub options: DrawingOptions,
}

impl RenderScene {
    /// Gibt zurück, ob die gespiegelte linke Linie überlagert werden soll.
    pub fn shows_mirror(&self) -> bool {
        self.phase == DrawingPhase::Checking
    }

    /// Pane, die in diesem Frame abgedunkelt wird (falls aktiviert).
    pub fn dimmed_pane(&self) -> Option<Pane> {
        if !self.options.dim_inactive_pane || !self.phase.is_collecting() {
            return None;
        }
        self.active_pane.map(Pane::opposite)
    }
}
