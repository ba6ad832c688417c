use crate::app::CommandLog;
use crate::core::{DrawingSession, SurfaceLayout};
use crate::shared::DrawingOptions;
use std::path::PathBuf;

use super::UiState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichen-Session (Phase, Linien, Flächengröße)
    pub session: DrawingSession,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Breiten, Eingabeverhalten)
    pub options: DrawingOptions,
    /// Zielpfad für das Speichern der Optionen
    pub options_path: PathBuf,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen (Session in `Init`).
    pub fn new() -> Self {
        Self::with_options(DrawingOptions::default(), DrawingOptions::config_path())
    }

    /// Erstellt einen App-State mit geladenen Optionen und deren Speicherpfad.
    pub fn with_options(options: DrawingOptions, options_path: PathBuf) -> Self {
        let session = DrawingSession::new(SurfaceLayout::default())
            .with_cancel_behavior(options.pointer_cancel);
        Self {
            session,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            options_path,
            should_exit: false,
        }
    }

    /// Anzahl der Punkte beider Linien (für UI-Anzeige)
    pub fn point_counts(&self) -> (usize, usize) {
        (
            self.session.left_stroke().len(),
            self.session.right_stroke().len(),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
