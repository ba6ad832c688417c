//! Optionen-Dialog für Farben, Breiten und Eingabeverhalten.

use crate::app::{AppIntent, AppState};
use crate::core::PointerCancelBehavior;
use crate::render::to_color32;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Linien ──────────────────────────────────────────
            ui.collapsing("Linien", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Linienstärke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.stroke_width_px)
                                .range(0.5..=20.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Linienfarbe:", &mut opts.stroke_color);
                changed |= color_edit(ui, "Spiegelfarbe:", &mut opts.mirror_color);
            });

            // ── Fläche ──────────────────────────────────────────
            ui.collapsing("Fläche", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Trennlinie (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.guide_width_px)
                                .range(0.5..=10.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Trennlinienfarbe:", &mut opts.guide_color);
                changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                changed |= ui
                    .checkbox(&mut opts.dim_inactive_pane, "Inaktive Seite abdunkeln")
                    .changed();
                ui.add_enabled_ui(opts.dim_inactive_pane, |ui| {
                    changed |= color_edit(ui, "Abdunklung:", &mut opts.inactive_pane_color);
                });
            });

            // ── Eingabe ─────────────────────────────────────────
            ui.collapsing("Eingabe", |ui| {
                ui.label("Pointer verlässt die Fläche:");
                changed |= ui
                    .radio_value(
                        &mut opts.pointer_cancel,
                        PointerCancelBehavior::EndStroke,
                        "Linie abschließen",
                    )
                    .changed();
                changed |= ui
                    .radio_value(
                        &mut opts.pointer_cancel,
                        PointerCancelBehavior::ReleaseOnly,
                        "Nur loslassen (Linie fortsetzbar)",
                    )
                    .changed();
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
