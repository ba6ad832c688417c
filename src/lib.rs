//! Mirror Drawing Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use core::{
    mirror_offset, status_message, DrawingPhase, DrawingSession, Pane, PointerCancelBehavior,
    PointerEvent, Stroke, SurfaceLayout,
};
pub use render::{render_frame, DrawSurface, LineStyle};
pub use shared::{DrawingOptions, RenderScene};
