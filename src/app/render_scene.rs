//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let session = &state.session;

    RenderScene {
        phase: session.phase(),
        layout: session.layout(),
        left_stroke: session.left_stroke().clone(),
        right_stroke: session.right_stroke().clone(),
        active_pane: session.active_pane(),
        options: state.options.clone(),
    }
}
