//! Top-Menü (File, Edit, Zeichnen).

use crate::app::{AppIntent, AppState};
use super::toolbar::result_controls_enabled;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let (can_show, can_hide) = result_controls_enabled(state.session.phase());

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit (Ctrl+Q)").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Zeichnen", |ui| {
                if ui.button("Neu beginnen").clicked() {
                    events.push(AppIntent::ResetRequested);
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(
                        can_show,
                        egui::Button::new("Ergebnis anzeigen"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ShowResultRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        can_hide,
                        egui::Button::new("Ergebnis ausblenden"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::HideResultRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
