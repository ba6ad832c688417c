use crate::shared::DrawingOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer auf der Zeichenfläche gedrückt (Flächenkoordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Pointer auf der Zeichenfläche bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Pointer losgelassen
    PointerReleased,
    /// Pointer verloren (Fläche verlassen, Touch abgebrochen)
    PointerCancelled,
    /// Größe der Zeichenfläche (Pixel)
    SurfaceResized { size: [f32; 2] },
    /// Neu beginnen (beide Linien verwerfen)
    ResetRequested,
    /// Ergebnis anzeigen
    ShowResultRequested,
    /// Ergebnis ausblenden
    HideResultRequested,
    /// Ergebnis je nach Phase anzeigen oder ausblenden (Shortcut)
    ToggleResultRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen im Dialog geändert
    OptionsChanged { options: DrawingOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
