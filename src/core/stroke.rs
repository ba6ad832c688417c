//! Freihand-Linie als geordnete Folge von Pane-Offsets.

use super::pane::mirror_offset;
use glam::Vec2;

/// Eine Freihand-Linie.
///
/// Die Punkte sind Offsets relativ zur Mitte ihrer Pane; die Reihenfolge
/// definiert den Polygonzug. Von außen nur lesbar, angehängt wird
/// ausschließlich über die [`DrawingSession`](super::DrawingSession).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Vec2>,
}

impl Stroke {
    /// Erstellt eine leere Linie.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt an.
    pub(crate) fn push(&mut self, offset: Vec2) {
        self.points.push(offset);
    }

    /// Verwirft alle Punkte (nur beim Session-Reset).
    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn noch kein Punkt aufgezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkte an der senkrechten Mittelachse gespiegelt.
    pub fn mirrored(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied().map(mirror_offset)
    }
}

impl FromIterator<Vec2> for Stroke {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
