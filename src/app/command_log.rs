//! Verlauf der Session-Schritte (Pointer, Ergebnis, Reset, Optionen).
//!
//! Dient Integrationstests als Nachweis, welche Schritte ein Intent ausgelöst hat.

use super::AppCommand;

/// Obergrenze; beim Überlauf fällt die ältere Hälfte weg.
const CAPACITY: usize = 1000;

/// Ausgeführte Session-Schritte in Ausführungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    steps: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merkt sich einen ausgeführten Schritt.
    pub fn record(&mut self, command: &AppCommand) {
        if self.steps.len() >= CAPACITY {
            self.steps.drain(..CAPACITY / 2);
        }
        self.steps.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Alle gemerkten Schritte, ältester zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.steps
    }
}
