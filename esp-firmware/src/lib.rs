// Library-Root: Hardware-Anbindung und Konfiguration
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von esp-core
pub use esp_core::{
    ColorSpectrum, LedError, SmartLedWriter, WakeupCause, WakeupReport, WakeupReporter,
    sweep_spectrum,
};
