//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::DrawingPhase;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // Der Druckpunkt selbst wird nicht aufgezeichnet, erst die folgenden Bewegungen
        AppIntent::PointerPressed { .. } => vec![AppCommand::PointerDown],
        AppIntent::PointerMoved { pos } => {
            if state.session.is_pointer_down() {
                vec![AppCommand::PointerMove { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::PointerUp],
        AppIntent::PointerCancelled => vec![AppCommand::PointerCancel],
        AppIntent::SurfaceResized { size } => {
            let layout = state.session.layout();
            if layout.width == size[0] && layout.height == size[1] {
                Vec::new()
            } else {
                vec![AppCommand::ResizeSurface { size }]
            }
        }
        AppIntent::ResetRequested => vec![AppCommand::BeginSession],
        AppIntent::ShowResultRequested => vec![AppCommand::RequestResult],
        AppIntent::HideResultRequested => vec![AppCommand::DismissResult],
        AppIntent::ToggleResultRequested => match state.session.phase() {
            DrawingPhase::Drawn => vec![AppCommand::RequestResult],
            DrawingPhase::Checking => vec![AppCommand::DismissResult],
            DrawingPhase::Init
            | DrawingPhase::LeftReady
            | DrawingPhase::LeftDrawing
            | DrawingPhase::RightReady
            | DrawingPhase::RightDrawing => Vec::new(),
        },
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
