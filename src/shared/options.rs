//! Zentrale Konfiguration für Mirror Drawing.
//!
//! `DrawingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::PointerCancelBehavior;
use serde::{Deserialize, Serialize};

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke beider Freihand-Linien in Pixeln.
pub const STROKE_WIDTH_PX: f32 = 2.0;
/// Farbe der Freihand-Linien (RGBA: Schwarz).
pub const STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der gespiegelten Vergleichslinie (RGBA: Rot).
pub const MIRROR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Hilfslinie & Hintergrund ────────────────────────────────────────

/// Linienstärke der senkrechten Trennlinie in Pixeln.
pub const GUIDE_WIDTH_PX: f32 = 2.0;
/// Farbe der Trennlinie (RGBA: Schwarz).
pub const GUIDE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Abdunklung der inaktiven Pane (RGBA: halbtransparentes Grau).
pub const INACTIVE_PANE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.08];

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße beim Start [Breite, Höhe].
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];

/// Name der Options-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "mirror_drawing.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `mirror_drawing.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingOptions {
    // ── Linien ──────────────────────────────────────────────────
    /// Linienstärke beider Freihand-Linien
    pub stroke_width_px: f32,
    /// Farbe der Freihand-Linien
    pub stroke_color: [f32; 4],
    /// Farbe der gespiegelten Vergleichslinie
    pub mirror_color: [f32; 4],

    // ── Fläche ──────────────────────────────────────────────────
    /// Linienstärke der Trennlinie
    pub guide_width_px: f32,
    /// Farbe der Trennlinie
    pub guide_color: [f32; 4],
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],
    /// Inaktive Pane während des Zeichnens abdunkeln
    pub dim_inactive_pane: bool,
    /// Farbe der Abdunklung
    pub inactive_pane_color: [f32; 4],

    // ── Eingabe ─────────────────────────────────────────────────
    /// Verhalten, wenn der Pointer die Fläche verlässt oder Touch abbricht
    pub pointer_cancel: PointerCancelBehavior,

    // ── Fenster ─────────────────────────────────────────────────
    /// Fenstergröße beim Start
    pub window_size: [f32; 2],
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            stroke_width_px: STROKE_WIDTH_PX,
            stroke_color: STROKE_COLOR,
            mirror_color: MIRROR_COLOR,

            guide_width_px: GUIDE_WIDTH_PX,
            guide_color: GUIDE_COLOR,
            background_color: BACKGROUND_COLOR,
            dim_inactive_pane: true,
            inactive_pane_color: INACTIVE_PANE_COLOR,

            pointer_cancel: PointerCancelBehavior::default(),

            window_size: WINDOW_SIZE,
        }
    }
}

impl DrawingOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_or_default(&content, path),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    fn from_toml_or_default(content: &str, path: &std::path::Path) -> Self {
        match toml::from_str(content) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mirror_drawing"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
