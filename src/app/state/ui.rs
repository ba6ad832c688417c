/// UI-bezogener Anwendungszustand (Dialoge, Meldungen)
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Letzte Fehlermeldung für die Status-Bar (z.B. Optionen nicht speicherbar)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            show_options_dialog: false,
            status_message: None,
        }
    }
}
