//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `R` = neu beginnen, Leertaste = Ergebnis umschalten, Escape = Ergebnis
/// ausblenden, Ctrl+Q = beenden.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Texteingaben (z.B. DragValue im Optionen-Dialog) haben Vorrang
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_r, key_space, key_escape, key_q) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Q),
        )
    });

    if modifiers.command && key_q {
        events.push(AppIntent::ExitRequested);
        return events;
    }

    if modifiers.any() {
        return events;
    }

    if key_r {
        events.push(AppIntent::ResetRequested);
    }

    if key_space {
        events.push(AppIntent::ToggleResultRequested);
    }

    if key_escape {
        events.push(AppIntent::HideResultRequested);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_with_key_event(key: egui::Key, modifiers: egui::Modifiers) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.modifiers = modifiers;
        raw_input.events.push(egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        });

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui);
            });
        });

        events
    }

    #[test]
    fn test_r_emits_reset_intent() {
        let events = collect_with_key_event(egui::Key::R, egui::Modifiers::default());

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AppIntent::ResetRequested));
    }

    #[test]
    fn test_space_emits_toggle_result_intent() {
        let events = collect_with_key_event(egui::Key::Space, egui::Modifiers::default());

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::ToggleResultRequested)));
    }

    #[test]
    fn test_escape_emits_hide_result_intent() {
        let events = collect_with_key_event(egui::Key::Escape, egui::Modifiers::default());

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::HideResultRequested)));
    }

    #[test]
    fn test_ctrl_q_emits_only_exit_intent() {
        let events = collect_with_key_event(egui::Key::Q, egui::Modifiers::COMMAND);

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AppIntent::ExitRequested));
    }

    #[test]
    fn test_ctrl_r_is_ignored() {
        let events = collect_with_key_event(egui::Key::R, egui::Modifiers::COMMAND);

        assert!(events.is_empty());
    }
}
