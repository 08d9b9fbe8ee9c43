//! Wakeup-Report: Boot zählen, Wakeup-Ursache per LED anzeigen,
//! Wakeup-Quellen für den nächsten Deep Sleep festlegen.

use core::fmt;
use core::time::Duration;

use crate::log::{error, info};
use crate::spectrum::{SpectrumColor, display_color};
use crate::traits::{BootCountStore, Dwell, SmartLedWriter};

/// Ursache für das Aufwachen
///
/// Rohwerte entsprechen der Nummerierung der Plattform
/// (0 = undefiniert, 1 = alle, 2 = EXT0, 3 = EXT1, 4 = Timer, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeupCause {
    /// Externes Signal über RTC_IO
    Ext0,
    /// Externes Signal über RTC_CNTL
    Ext1,
    Timer,
    Touchpad,
    /// ULP-Coprozessor
    Ulp,
    /// Kaltstart, Reset oder unbekannte Ursache (Rohwert)
    Other(u32),
}

impl WakeupCause {
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            2 => Self::Ext0,
            3 => Self::Ext1,
            4 => Self::Timer,
            5 => Self::Touchpad,
            6 => Self::Ulp,
            other => Self::Other(other),
        }
    }

    pub const fn raw(self) -> u32 {
        match self {
            Self::Ext0 => 2,
            Self::Ext1 => 3,
            Self::Timer => 4,
            Self::Touchpad => 5,
            Self::Ulp => 6,
            Self::Other(raw) => raw,
        }
    }

    /// Farbe, mit der die Ursache angezeigt wird
    pub const fn indicator(self) -> SpectrumColor {
        match self {
            Self::Ext0 => SpectrumColor::Green,
            Self::Ext1 => SpectrumColor::Orange,
            Self::Timer => SpectrumColor::Blue,
            Self::Touchpad => SpectrumColor::Violet,
            Self::Ulp => SpectrumColor::Cyan,
            Self::Other(_) => SpectrumColor::Red,
        }
    }

    /// true, wenn das Aufwachen aus einem Deep Sleep kam
    pub const fn is_deep_sleep(self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for WakeupCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ext0 => f.write_str("Wakeup caused by external signal using RTC_IO"),
            Self::Ext1 => f.write_str("Wakeup caused by external signal using RTC_CNTL"),
            Self::Timer => f.write_str("Wakeup caused by timer"),
            Self::Touchpad => f.write_str("Wakeup caused by touchpad"),
            Self::Ulp => f.write_str("Wakeup caused by ULP program"),
            Self::Other(raw) => write!(f, "Wakeup was not caused by deep sleep: {}", raw),
        }
    }
}

/// Pegel, bei dem ein externer Pin weckt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeLevel {
    Low,
    High,
}

/// Wakeup-Quelle A: externer Pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtWakeup {
    pub gpio: u8,
    pub level: WakeLevel,
}

/// Wakeup-Quellen, die vor dem Deep Sleep scharf geschaltet werden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPlan {
    pub ext_wakeup: ExtWakeup,
    /// Wakeup-Quelle B: Timer
    pub timer: Duration,
}

impl SleepPlan {
    pub const fn new(ext_wakeup: ExtWakeup, timer: Duration) -> Self {
        Self { ext_wakeup, timer }
    }
}

impl Default for SleepPlan {
    fn default() -> Self {
        Self::new(
            ExtWakeup {
                gpio: 1,
                level: WakeLevel::High,
            },
            Duration::from_secs(5),
        )
    }
}

/// Konfiguration für den Wakeup-Report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReporterConfig {
    /// Anzeigedauer pro Farbe in Millisekunden
    pub dwell_ms: u32,
    pub flash_brightness: f32,
    pub sleep: SleepPlan,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 500,
            flash_brightness: 1.0,
            sleep: SleepPlan::default(),
        }
    }
}

/// Ergebnis eines Report-Durchlaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeupReport {
    pub boot_number: u32,
    pub cause: WakeupCause,
    /// Anzahl fehlgeschlagener LED-Schreibvorgänge
    pub led_errors: u8,
    /// Wakeup-Quellen für den anschließenden Deep Sleep
    pub sleep: SleepPlan,
}

/// Erhöht den Boot-Zähler im persistenten Speicher
///
/// Gibt die neue Boot-Nummer zurück (beginnt bei 1 nach Kaltstart).
pub fn record_boot<S: BootCountStore>(store: &mut S) -> u32 {
    let boot_number = store.load().wrapping_add(1);
    store.store(boot_number);
    info!("Boot number: {}", boot_number);
    boot_number
}

/// Einmaliger Ablauf nach jedem Boot
pub struct WakeupReporter {
    config: ReporterConfig,
}

impl WakeupReporter {
    pub const fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Boot zählen, Ursache anzeigen, Wakeup-Quellen festlegen
    ///
    /// Ablauf: Weiß (Dwell) → Farbe der Ursache (Dwell) → Schwarz.
    /// LED-Fehler werden geloggt und gezählt, der Ablauf läuft weiter,
    /// damit der Deep Sleep in jedem Fall scharf geschaltet wird.
    pub fn run<L, D, S>(
        &self,
        led: &mut L,
        dwell: &mut D,
        store: &mut S,
        cause: WakeupCause,
    ) -> WakeupReport
    where
        L: SmartLedWriter,
        D: Dwell,
        S: BootCountStore,
    {
        let boot_number = record_boot(store);
        let brightness = self.config.flash_brightness;
        let mut led_errors: u8 = 0;

        // Universelles "aufgewacht"-Signal
        show(led, SpectrumColor::White, brightness, &mut led_errors);
        dwell.dwell_ms(self.config.dwell_ms);

        info!("***** wakeup reason {}", cause.raw());
        match cause {
            WakeupCause::Other(_raw) => {
                info!("Wakeup was not caused by deep sleep: {}", _raw)
            }
            _ => info!("{}", cause),
        }
        show(led, cause.indicator(), brightness, &mut led_errors);
        dwell.dwell_ms(self.config.dwell_ms);
        show(led, SpectrumColor::Black, brightness, &mut led_errors);

        let sleep = self.config.sleep;
        info!(
            "Setup ESP32 to sleep for every {} Seconds",
            sleep.timer.as_secs()
        );
        info!("Going to sleep now");

        WakeupReport {
            boot_number,
            cause,
            led_errors,
            sleep,
        }
    }
}

/// Schreibt eine Farbe; Fehler werden geloggt und gezählt statt abzubrechen
fn show<L: SmartLedWriter>(
    led: &mut L,
    color: SpectrumColor,
    brightness: f32,
    errors: &mut u8,
) {
    if let Err(_e) = display_color(led, color, brightness) {
        error!("Failed to write to LED");
        *errors = errors.saturating_add(1);
    }
}

impl Default for WakeupReporter {
    fn default() -> Self {
        Self::new(ReporterConfig::default())
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for WakeupCause {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            WakeupCause::Ext0 => {
                defmt::write!(fmt, "Wakeup caused by external signal using RTC_IO")
            }
            WakeupCause::Ext1 => {
                defmt::write!(fmt, "Wakeup caused by external signal using RTC_CNTL")
            }
            WakeupCause::Timer => defmt::write!(fmt, "Wakeup caused by timer"),
            WakeupCause::Touchpad => defmt::write!(fmt, "Wakeup caused by touchpad"),
            WakeupCause::Ulp => defmt::write!(fmt, "Wakeup caused by ULP program"),
            WakeupCause::Other(raw) => {
                defmt::write!(fmt, "Wakeup was not caused by deep sleep: {}", raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_causes() {
        assert_eq!(WakeupCause::from_raw(2), WakeupCause::Ext0);
        assert_eq!(WakeupCause::from_raw(3), WakeupCause::Ext1);
        assert_eq!(WakeupCause::from_raw(4), WakeupCause::Timer);
        assert_eq!(WakeupCause::from_raw(5), WakeupCause::Touchpad);
        assert_eq!(WakeupCause::from_raw(6), WakeupCause::Ulp);
    }

    #[test]
    fn test_from_raw_undefined_is_other() {
        assert_eq!(WakeupCause::from_raw(0), WakeupCause::Other(0));
        assert_eq!(WakeupCause::from_raw(7), WakeupCause::Other(7));
        assert!(!WakeupCause::from_raw(0).is_deep_sleep());
    }

    #[test]
    fn test_raw_roundtrip() {
        for raw in 0..12 {
            assert_eq!(WakeupCause::from_raw(raw).raw(), raw);
        }
    }

    #[test]
    fn test_indicator_colors() {
        assert_eq!(WakeupCause::Ext0.indicator(), SpectrumColor::Green);
        assert_eq!(WakeupCause::Ext1.indicator(), SpectrumColor::Orange);
        assert_eq!(WakeupCause::Timer.indicator(), SpectrumColor::Blue);
        assert_eq!(WakeupCause::Touchpad.indicator(), SpectrumColor::Violet);
        assert_eq!(WakeupCause::Ulp.indicator(), SpectrumColor::Cyan);
        assert_eq!(WakeupCause::Other(99).indicator(), SpectrumColor::Red);
    }

    #[test]
    fn test_default_sleep_plan() {
        let plan = SleepPlan::default();
        assert_eq!(plan.ext_wakeup.gpio, 1);
        assert_eq!(plan.ext_wakeup.level, WakeLevel::High);
        assert_eq!(plan.timer, Duration::from_secs(5));
    }
}
