//! Zustandsautomat einer Zeichen-Session (links zeichnen → rechts zeichnen → vergleichen).
//!
//! Ungültige Übergänge sind stille No-Ops: die Session kennt keine Fehler.

use super::pane::{Pane, SurfaceLayout};
use super::phase::DrawingPhase;
use super::stroke::Stroke;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Verhalten bei abgebrochenem Pointer (Maus verlässt Fläche, Touch-Cancel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerCancelBehavior {
    /// Wie `pointer_up()`: Drag beenden und Phase weiterschalten
    #[default]
    EndStroke,
    /// Nur das Drag-Flag zurücksetzen, Phase bleibt stehen
    ReleaseOnly,
}

/// Plattformneutrales Pointer-Ereignis in Flächenkoordinaten (Pixel).
///
/// Maus und Touch werden im UI-Layer auf diese vier Ereignisse normalisiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primärtaste gedrückt / Finger aufgesetzt
    Down { pos: Vec2 },
    /// Pointer bewegt
    Move { pos: Vec2 },
    /// Primärtaste losgelassen / Finger abgehoben
    Up,
    /// Pointer verloren (Fläche verlassen, Touch abgebrochen)
    Cancel,
}

/// Eine Zeichen-Session: Phase, Drag-Flag, beide Linien und Flächengröße.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    phase: DrawingPhase,
    pointer_down: bool,
    left: Stroke,
    right: Stroke,
    layout: SurfaceLayout,
    cancel_behavior: PointerCancelBehavior,
}

impl DrawingSession {
    /// Erstellt eine Session in Phase `Init` mit gegebener Flächengröße.
    pub fn new(layout: SurfaceLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Setzt das Verhalten für [`pointer_cancel`](Self::pointer_cancel).
    pub fn with_cancel_behavior(mut self, behavior: PointerCancelBehavior) -> Self {
        self.cancel_behavior = behavior;
        self
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> DrawingPhase {
        self.phase
    }

    /// Ob der Pointer gerade gedrückt ist.
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Linke (Original-)Linie.
    pub fn left_stroke(&self) -> &Stroke {
        &self.left
    }

    /// Rechte (nachgezeichnete) Linie.
    pub fn right_stroke(&self) -> &Stroke {
        &self.right
    }

    /// Aktuelle Flächengröße.
    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    /// Aktuelles Cancel-Verhalten.
    pub fn cancel_behavior(&self) -> PointerCancelBehavior {
        self.cancel_behavior
    }

    /// Ändert das Cancel-Verhalten (z.B. nach Options-Änderung).
    pub fn set_cancel_behavior(&mut self, behavior: PointerCancelBehavior) {
        self.cancel_behavior = behavior;
    }

    /// Pane, die in der aktuellen Phase Punkte annimmt oder als nächstes annehmen wird.
    pub fn active_pane(&self) -> Option<Pane> {
        match self.phase {
            DrawingPhase::LeftReady | DrawingPhase::LeftDrawing => Some(Pane::Left),
            DrawingPhase::RightReady | DrawingPhase::RightDrawing => Some(Pane::Right),
            DrawingPhase::Init | DrawingPhase::Drawn | DrawingPhase::Checking => None,
        }
    }

    /// Vollständiger Reset: Phase `LeftReady`, beide Linien leer, Drag-Flag aus.
    pub fn begin(&mut self) {
        self.phase = DrawingPhase::LeftReady;
        self.pointer_down = false;
        self.left.clear();
        self.right.clear();
    }

    /// Pointer gedrückt: startet die linke bzw. rechte Linie.
    pub fn pointer_down(&mut self) {
        self.pointer_down = true;
        self.phase = match self.phase {
            DrawingPhase::LeftReady => DrawingPhase::LeftDrawing,
            DrawingPhase::RightReady => DrawingPhase::RightDrawing,
            other @ (DrawingPhase::Init
            | DrawingPhase::LeftDrawing
            | DrawingPhase::RightDrawing
            | DrawingPhase::Drawn
            | DrawingPhase::Checking) => other,
        };
    }

    /// Pointer bewegt: hängt bei gedrücktem Pointer einen Punkt an die aktive Linie an.
    ///
    /// `pos` ist in Flächenkoordinaten; gespeichert wird der Offset zur Mitte
    /// der aktiven Pane.
    pub fn pointer_move(&mut self, pos: Vec2) {
        if !self.pointer_down {
            return;
        }
        match self.phase {
            DrawingPhase::LeftDrawing => {
                let offset = self.layout.to_pane_offset(Pane::Left, pos);
                self.left.push(offset);
            }
            DrawingPhase::RightDrawing => {
                let offset = self.layout.to_pane_offset(Pane::Right, pos);
                self.right.push(offset);
            }
            DrawingPhase::Init
            | DrawingPhase::LeftReady
            | DrawingPhase::RightReady
            | DrawingPhase::Drawn
            | DrawingPhase::Checking => {}
        }
    }

    /// Pointer losgelassen: schließt die aktive Linie ab.
    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
        self.phase = match self.phase {
            DrawingPhase::LeftDrawing => DrawingPhase::RightReady,
            DrawingPhase::RightDrawing => DrawingPhase::Drawn,
            other @ (DrawingPhase::Init
            | DrawingPhase::LeftReady
            | DrawingPhase::RightReady
            | DrawingPhase::Drawn
            | DrawingPhase::Checking) => other,
        };
    }

    /// Pointer abgebrochen, Verhalten gemäß [`PointerCancelBehavior`].
    pub fn pointer_cancel(&mut self) {
        match self.cancel_behavior {
            PointerCancelBehavior::EndStroke => self.pointer_up(),
            PointerCancelBehavior::ReleaseOnly => self.pointer_down = false,
        }
    }

    /// Ergebnis anzeigen (nur aus `Drawn`).
    pub fn request_result(&mut self) {
        if self.phase == DrawingPhase::Drawn {
            self.phase = DrawingPhase::Checking;
        }
    }

    /// Ergebnis ausblenden (nur aus `Checking`).
    pub fn dismiss_result(&mut self) {
        if self.phase == DrawingPhase::Checking {
            self.phase = DrawingPhase::Drawn;
        }
    }

    /// Aktualisiert die Flächengröße.
    ///
    /// Bereits gezeichnete Punkte werden nicht umskaliert; sie bleiben an
    /// ihren alten Pane-Offsets verankert.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.layout = SurfaceLayout::new(width, height);
    }

    /// Spielt ein normalisiertes Pointer-Ereignis direkt ein.
    ///
    /// Einstieg für Ereignisfolgen ohne App-Layer (Tests, Fuzzing, Benchmarks);
    /// die Anwendung selbst läuft über `AppIntent` und den Controller.
    pub fn apply_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { .. } => self.pointer_down(),
            PointerEvent::Move { pos } => self.pointer_move(pos),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Cancel => self.pointer_cancel(),
        }
    }
}

#[cfg(test)]
mod tests;
