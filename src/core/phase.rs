//! Phasen des Zeichen-Ablaufs und zugehörige Statusmeldungen.

/// Aktuelle Stufe des Zwei-Linien-Ablaufs (links zeichnen, rechts zeichnen, vergleichen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingPhase {
    /// Vor dem ersten `begin()`
    #[default]
    Init,
    /// Wartet auf die linke Linie
    LeftReady,
    /// Linke Linie wird gezeichnet
    LeftDrawing,
    /// Wartet auf die rechte Linie
    RightReady,
    /// Rechte Linie wird gezeichnet
    RightDrawing,
    /// Beide Linien fertig, Ergebnis noch verdeckt
    Drawn,
    /// Gespiegelte linke Linie wird über der rechten angezeigt
    Checking,
}

impl DrawingPhase {
    /// Alle Phasen in Ablauf-Reihenfolge.
    pub const ALL: [DrawingPhase; 7] = [
        DrawingPhase::Init,
        DrawingPhase::LeftReady,
        DrawingPhase::LeftDrawing,
        DrawingPhase::RightReady,
        DrawingPhase::RightDrawing,
        DrawingPhase::Drawn,
        DrawingPhase::Checking,
    ];

    /// Gibt zurück, ob in dieser Phase gerade eine Linie gezeichnet wird.
    pub fn is_drawing(self) -> bool {
        matches!(self, DrawingPhase::LeftDrawing | DrawingPhase::RightDrawing)
    }

    /// Gibt zurück, ob die Phase noch zum Zeichnen einer der beiden Linien gehört.
    pub fn is_collecting(self) -> bool {
        matches!(
            self,
            DrawingPhase::LeftReady
                | DrawingPhase::LeftDrawing
                | DrawingPhase::RightReady
                | DrawingPhase::RightDrawing
        )
    }

    /// Kurzname für Logs und Status-Bar.
    pub fn label(self) -> &'static str {
        match self {
            DrawingPhase::Init => "Init",
            DrawingPhase::LeftReady => "LeftReady",
            DrawingPhase::LeftDrawing => "LeftDrawing",
            DrawingPhase::RightReady => "RightReady",
            DrawingPhase::RightDrawing => "RightDrawing",
            DrawingPhase::Drawn => "Drawn",
            DrawingPhase::Checking => "Checking",
        }
    }
}

/// Liefert die Statuszeile für eine Phase (genau eine feste Meldung pro Phase).
pub fn status_message(phase: DrawingPhase) -> &'static str {
    match phase {
        DrawingPhase::Init => "Initialisierung läuft",
        DrawingPhase::LeftReady => "Bitte auf der linken Seite eine Linie zeichnen",
        DrawingPhase::LeftDrawing => "Linke Linie wird gezeichnet",
        DrawingPhase::RightReady => "Bitte auf der rechten Seite eine Linie zeichnen",
        DrawingPhase::RightDrawing => "Rechte Linie wird gezeichnet",
        DrawingPhase::Drawn => "Bitte das Ergebnis prüfen",
        DrawingPhase::Checking => "Ergebnis wird angezeigt",
    }
}
