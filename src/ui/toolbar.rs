//! Toolbar mit den drei Session-Steuerbefehlen.

use crate::app::{AppIntent, AppState};
use crate::core::DrawingPhase;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Freigabe der Ergebnis-Buttons siehe [`result_controls_enabled`].
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let (can_show, can_hide) = result_controls_enabled(state.session.phase());

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Neu beginnen (R)").clicked() {
                events.push(AppIntent::ResetRequested);
            }

            ui.separator();

            if ui
                .add_enabled(
                    can_show,
                    egui::Button::new("Ergebnis anzeigen (Leertaste)"),
                )
                .clicked()
            {
                events.push(AppIntent::ShowResultRequested);
            }

            if ui
                .add_enabled(
                    can_hide,
                    egui::Button::new("Ergebnis ausblenden (Esc)"),
                )
                .clicked()
            {
                events.push(AppIntent::HideResultRequested);
            }
        });
    });

    events
}

/// Liefert `(anzeigen, ausblenden)`: "Ergebnis anzeigen" ist nur in `Drawn`
/// aktiv, "Ergebnis ausblenden" nur in `Checking`.
pub(crate) fn result_controls_enabled(phase: DrawingPhase) -> (bool, bool) {
    (phase == DrawingPhase::Drawn, phase == DrawingPhase::Checking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_controls_follow_phase() {
        for phase in DrawingPhase::ALL {
            let (can_show, can_hide) = result_controls_enabled(phase);
            assert_eq!(can_show, phase == DrawingPhase::Drawn, "{phase:?}");
            assert_eq!(can_hide, phase == DrawingPhase::Checking, "{phase:?}");
        }
    }

    #[test]
    fn render_toolbar_emits_no_intents_without_clicks() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.session.begin();

        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            events = render_toolbar(ctx, &state);
        });

        assert!(events.is_empty());
    }
}
