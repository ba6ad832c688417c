//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::DrawingOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: DrawingOptions) -> anyhow::Result<()> {
    state.session.set_cancel_behavior(options.pointer_cancel);
    state.options = options;
    state.options.save_to_file(&state.options_path)?;
    state.ui.status_message = None;
    Ok(())
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, DrawingOptions::default())
}
