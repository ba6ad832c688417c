//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::status_message;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let phase = state.session.phase();
            ui.label(egui::RichText::new(status_message(phase)).strong());

            ui.separator();

            let (left, right) = state.point_counts();
            ui.label(format!("Links: {} Punkte | Rechts: {} Punkte", left, right));

            ui.separator();

            ui.label(format!("Phase: {}", phase.label()));

            // Statusnachricht (z.B. Optionen nicht speicherbar)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
