//! Core-Domänentypen: Phasen, Linien, Pane-Geometrie und Zeichen-Session.

pub mod pane;
pub mod phase;
/// Zeichen-Session als expliziter Zustandsautomat
///
/// Hält Phase, Drag-Flag, beide Linien und die Flächengröße.
pub mod session;
pub mod stroke;

pub use pane::{mirror_offset, Pane, SurfaceLayout};
pub use phase::{status_message, DrawingPhase};
pub use session::{DrawingSession, PointerCancelBehavior, PointerEvent};
pub use stroke::Stroke;
