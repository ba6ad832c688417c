use crate::shared::DrawingOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Session neu starten (`begin()`)
    BeginSession,
    /// Pointer gedrückt
    PointerDown,
    /// Pointer bewegt (Flächenkoordinaten)
    PointerMove { pos: glam::Vec2 },
    /// Pointer losgelassen
    PointerUp,
    /// Pointer abgebrochen
    PointerCancel,
    /// Ergebnis anzeigen (`Drawn` → `Checking`)
    RequestResult,
    /// Ergebnis ausblenden (`Checking` → `Drawn`)
    DismissResult,
    /// Flächengröße übernehmen
    ResizeSurface { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: DrawingOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
}
