//! Normalisierung von Maus- und Touch-Events auf [`PointerEvent`]s.

use super::InputState;
use crate::core::PointerEvent;

impl InputState {
    /// Übersetzt rohe egui-Events eines Frames in Pointer-Ereignisse.
    ///
    /// egui-winit emuliert für den ersten Finger bereits Maus-Events; als
    /// reines Touch-Event wird daher nur `TouchPhase::Cancel` ausgewertet.
    /// Verlässt der gedrückte Pointer die Fläche, entsteht ein `Cancel`.
    pub(crate) fn translate_events(
        &mut self,
        raw_events: &[egui::Event],
        rect: egui::Rect,
        canvas_hovered: bool,
    ) -> Vec<PointerEvent> {
        let mut out = Vec::new();

        for event in raw_events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if !self.pressed && canvas_hovered && rect.contains(*pos) {
                        self.pressed = true;
                        out.push(PointerEvent::Down {
                            pos: to_local(*pos, rect),
                        });
                    }
                }
                egui::Event::PointerButton {
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    if self.pressed {
                        self.pressed = false;
                        out.push(PointerEvent::Up);
                    }
                }
                egui::Event::PointerMoved(pos) if self.pressed => {
                    if rect.contains(*pos) {
                        out.push(PointerEvent::Move {
                            pos: to_local(*pos, rect),
                        });
                    } else {
                        self.pressed = false;
                        out.push(PointerEvent::Cancel);
                    }
                }
                egui::Event::PointerGone if self.pressed => {
                    self.pressed = false;
                    out.push(PointerEvent::Cancel);
                }
                egui::Event::Touch {
                    phase: egui::TouchPhase::Cancel,
                    ..
                } if self.pressed => {
                    self.pressed = false;
                    out.push(PointerEvent::Cancel);
                }
                _ => {}
            }
        }

        out
    }
}

/// Rechnet eine Bildschirmposition in Flächenkoordinaten um.
fn to_local(pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    let local = pos - rect.min;
    glam::Vec2::new(local.x, local.y)
}
