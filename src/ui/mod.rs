//! UI-Komponenten: Menü, Toolbar, Status-Bar, Optionen-Dialog, Canvas-Input.
//!
//! Panels erzeugen ausschließlich `AppIntent`s; Zustandsänderungen laufen
//! über den `AppController`.

pub mod input;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
