// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use core::time::Duration;

use esp_core::{ChannelScale, ExtWakeup, ReporterConfig, SleepPlan, WakeLevel};

// ============================================================================
// Serielle Konsole
// ============================================================================

/// Wartezeit nach dem Boot, damit ein Serial Monitor sich verbinden kann
pub const SERIAL_ATTACH_DELAY_MS: u32 = 1000;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
/// Muss zum Peripheral in main.rs passen (GPIO8 auf dem DevKitC-1)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Maximaler Kanalwert für das Spektrum (Standard-Helligkeit der Board-LED)
pub const SPECTRUM_SCALE: ChannelScale = ChannelScale(64);

/// Anzeigedauer jeder Farbe beim Wakeup-Report in Millisekunden
pub const FLASH_DWELL_MS: u32 = 500;

/// Helligkeit für den Wakeup-Report (0.0 - 1.0)
pub const FLASH_BRIGHTNESS: f32 = 1.0;

/// Schrittweite beim Spektrum-Selbsttest (Feature `spectrum-sweep`)
pub const SWEEP_STEP_MS: u32 = 150;

/// Helligkeit beim Spektrum-Selbsttest
pub const SWEEP_BRIGHTNESS: f32 = 0.5;

// ============================================================================
// Deep Sleep Konfiguration
// ============================================================================

/// GPIO für Wakeup-Quelle A (LP-IO, Taster gegen 3.3V, Pulldown extern)
/// Muss zum Peripheral in main.rs passen
pub const WAKEUP_GPIO_PIN: u8 = 1;

/// Pegel, bei dem der Wakeup-Pin weckt
pub const WAKEUP_LEVEL: WakeLevel = WakeLevel::High;

/// Sleep-Dauer in Sekunden bis zum Timer-Wakeup
/// Kann zur Build-Zeit per DEEP_SLEEP_SECS (.env) überschrieben werden
pub const DEEP_SLEEP_SECS: u64 = match option_env!("DEEP_SLEEP_SECS") {
    Some(value) => parse_secs(value, 5),
    None => 5,
};

/// Wakeup-Report-Konfiguration aus den Konstanten oben
pub const REPORTER_CONFIG: ReporterConfig = ReporterConfig {
    dwell_ms: FLASH_DWELL_MS,
    flash_brightness: FLASH_BRIGHTNESS,
    sleep: SleepPlan::new(
        ExtWakeup {
            gpio: WAKEUP_GPIO_PIN,
            level: WAKEUP_LEVEL,
        },
        Duration::from_secs(DEEP_SLEEP_SECS),
    ),
};

/// Parst eine Dezimalzahl zur Compile-Zeit
///
/// Bei ungültiger Eingabe (leer, Nicht-Ziffern, 0) gilt `default`.
const fn parse_secs(value: &str, default: u64) -> u64 {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return default;
    }

    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return default;
        }
        result = match result.checked_mul(10) {
            Some(v) => match v.checked_add((digit - b'0') as u64) {
                Some(v) => v,
                None => return default,
            },
            None => return default,
        };
        i += 1;
    }

    if result == 0 { default } else { result }
}
