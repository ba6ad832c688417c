//! Pane-Geometrie: Mittelpunkte, Pane-relative Offsets und Spiegelung.

use glam::Vec2;

/// Linke oder rechte Hälfte der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Linke Hälfte (Original-Linie)
    Left,
    /// Rechte Hälfte (Nachzeichnung + gespiegelter Vergleich)
    Right,
}

impl Pane {
    /// Die jeweils andere Hälfte.
    pub fn opposite(self) -> Self {
        match self {
            Pane::Left => Pane::Right,
            Pane::Right => Pane::Left,
        }
    }
}

/// Abmessungen der gesamten Zeichenfläche (beide Panes) in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceLayout {
    /// Breite der Fläche (beide Panes zusammen)
    pub width: f32,
    /// Höhe der Fläche
    pub height: f32,
}

impl SurfaceLayout {
    /// Erstellt ein Layout aus Breite und Höhe.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ursprung des lokalen Koordinatensystems einer Pane.
    ///
    /// Links: `(W/4, H/2)`, rechts: `(3W/4, H/2)`.
    pub fn pane_center(&self, pane: Pane) -> Vec2 {
        let x = match pane {
            Pane::Left => self.width / 4.0,
            Pane::Right => self.width * 3.0 / 4.0,
        };
        Vec2::new(x, self.height / 2.0)
    }

    /// Rechnet eine Flächenposition in einen Offset relativ zur Pane-Mitte um.
    pub fn to_pane_offset(&self, pane: Pane, surface_pos: Vec2) -> Vec2 {
        surface_pos - self.pane_center(pane)
    }

    /// Rechnet einen Pane-Offset zurück in Flächenkoordinaten.
    pub fn to_surface(&self, pane: Pane, offset: Vec2) -> Vec2 {
        self.pane_center(pane) + offset
    }

    /// X-Position der senkrechten Trennlinie zwischen den Panes.
    pub fn guide_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Rechteck `(min, max)` einer Pane in Flächenkoordinaten.
    pub fn pane_rect(&self, pane: Pane) -> (Vec2, Vec2) {
        let half = self.guide_x();
        match pane {
            Pane::Left => (Vec2::ZERO, Vec2::new(half, self.height)),
            Pane::Right => (Vec2::new(half, 0.0), Vec2::new(self.width, self.height)),
        }
    }
}

/// Spiegelt einen Pane-Offset an der senkrechten Mittelachse (x → -x).
pub fn mirror_offset(offset: Vec2) -> Vec2 {
    Vec2::new(-offset.x, offset.y)
}
