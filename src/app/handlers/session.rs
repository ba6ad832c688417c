//! Handler für die Zeichen-Session (Pointer, Ergebnis, Flächengröße).

use crate::app::AppState;
use crate::core::DrawingSession;

/// Führt einen Session-Übergang aus und loggt Phasenwechsel.
fn transition(state: &mut AppState, action: &str, apply: impl FnOnce(&mut DrawingSession)) {
    let before = state.session.phase();
    apply(&mut state.session);
    let after = state.session.phase();
    if before != after {
        log::debug!("{}: {} → {}", action, before.label(), after.label());
    }
}

/// Startet die Session neu: beide Linien werden verworfen.
pub fn begin(state: &mut AppState) {
    let (left, right) = state.point_counts();
    state.session.begin();
    log::info!(
        "Session neu gestartet ({} + {} Punkte verworfen)",
        left,
        right
    );
}

/// Pointer gedrückt.
pub fn pointer_down(state: &mut AppState) {
    transition(state, "pointer_down", DrawingSession::pointer_down);
}

/// Pointer bewegt (Flächenkoordinaten).
pub fn pointer_move(state: &mut AppState, pos: glam::Vec2) {
    state.session.pointer_move(pos);
}

/// Pointer losgelassen.
pub fn pointer_up(state: &mut AppState) {
    transition(state, "pointer_up", DrawingSession::pointer_up);
}

/// Pointer abgebrochen.
pub fn pointer_cancel(state: &mut AppState) {
    transition(state, "pointer_cancel", DrawingSession::pointer_cancel);
}

/// Ergebnis anzeigen.
pub fn request_result(state: &mut AppState) {
    transition(state, "request_result", DrawingSession::request_result);
}

/// Ergebnis ausblenden.
pub fn dismiss_result(state: &mut AppState) {
    transition(state, "dismiss_result", DrawingSession::dismiss_result);
}

/// Übernimmt die neue Flächengröße.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.session.resize(size[0], size[1]);
    log::debug!("Zeichenfläche: {:.0}x{:.0}", size[0], size[1]);
}
