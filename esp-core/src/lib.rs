//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die Farbtabelle und den Wakeup-Ablauf.

#![no_std]

mod log;

pub mod spectrum;
pub mod traits;
pub mod wakeup;

// Re-exports für einfachen Zugriff
pub use spectrum::{
    Brightness, ChannelScale, ColorSpectrum, DEFAULT_BRIGHTNESS, SPECTRUM_LEN, SPECTRUM_TABLE,
    SpectrumColor, display_color, display_color_id, scale_color, sweep_spectrum,
};
pub use traits::{BootCountStore, Dwell, LedError, SmartLedWriter};
pub use wakeup::{
    ExtWakeup, ReporterConfig, SleepPlan, WakeLevel, WakeupCause, WakeupReport, WakeupReporter,
    record_boot,
};
