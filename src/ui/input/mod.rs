//! Canvas-Input-Handling: Maus, Touch und Tastatur → AppIntent.
//!
//! Aufgeteilt in:
//! - `pointer` — Übersetzung roher egui-Events in [`PointerEvent`]s
//!
//! Die Session sieht nie egui-Typen, nur die vier normalisierten Ereignisse.

mod pointer;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::PointerEvent;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde innerhalb der Fläche gedrückt und ist noch unten
    pub(crate) pressed: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { pressed: false }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Liefert immer zuerst die aktuelle Flächengröße, danach Shortcuts und
    /// Pointer-Ereignisse in Eingangsreihenfolge.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::SurfaceResized {
            size: [rect.width(), rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let canvas_hovered = response.contains_pointer();
        let raw_events = ui.input(|i| i.events.clone());
        events.extend(
            self.translate_events(&raw_events, rect, canvas_hovered)
                .into_iter()
                .map(pointer_event_to_intent),
        );

        events
    }

    /// Gibt zurück, ob gerade eine Linie gezogen wird (für Repaint-Entscheidungen).
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Bildet ein normalisiertes Pointer-Ereignis auf den passenden Intent ab.
fn pointer_event_to_intent(event: PointerEvent) -> AppIntent {
    match event {
        PointerEvent::Down { pos } => AppIntent::PointerPressed { pos },
        PointerEvent::Move { pos } => AppIntent::PointerMoved { pos },
        PointerEvent::Up => AppIntent::PointerReleased,
        PointerEvent::Cancel => AppIntent::PointerCancelled,
    }
}
