//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Peripheral konnte nicht initialisiert werden (z.B. RMT)
    InitFailed,
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf die eine adressierbare RGB LED (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Blockierende Wartezeit (Dwell Time)
///
/// Nur für für Menschen sichtbare Pausen gedacht. Es gibt keine anderen
/// Tasks, die in der Zeit laufen müssten.
pub trait Dwell {
    fn dwell_ms(&mut self, ms: u32);
}

/// Speicher für den Boot-Zähler, der Deep Sleep überlebt
///
/// Auf dem ESP32 liegt der Wert im RTC-Fast-RAM. Bei Stromverlust
/// startet er wieder bei 0.
pub trait BootCountStore {
    fn load(&self) -> u32;
    fn store(&mut self, value: u32);
}
