// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{info, warn};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::rtc_cntl::reset_reason;
use esp_hal::system::Cpu;
use esp_hal_smartled::smart_led_buffer;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_wakeup_spektrum::config::{
    LED_GPIO_PIN, REPORTER_CONFIG, RMT_CLOCK_MHZ, SERIAL_ATTACH_DELAY_MS,
};
use esp_wakeup_spektrum::hal::{RmtLedWriter, RtcBootCount, enter_deep_sleep, raw_wakeup_cause};
use esp_wakeup_spektrum::{WakeupCause, WakeupReporter};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Läuft nach jedem Boot und jedem Wakeup einmal komplett durch:
/// Boot zählen, Wakeup-Ursache per LED anzeigen, Wakeup-Quellen
/// scharf schalten, Deep Sleep. Kehrt nie zurück.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Zeit geben, um den Serial Monitor zu öffnen
    let mut delay = Delay::new();
    delay.delay_millis(SERIAL_ATTACH_DELAY_MS);

    // Wakeup-Ursache und Reset-Grund abfragen
    let cause = WakeupCause::from_raw(raw_wakeup_cause());
    match reset_reason(Cpu::ProCpu) {
        Some(reason) => info!("Reset reason: {}", reason as u32),
        None => warn!("Reset reason unknown"),
    }

    // LED initialisieren (Pin auf Ausgang)
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);
    let mut led = RmtLedWriter::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        &mut rmt_buffer,
    )
    .expect("Failed to initialize RMT for LED");
    info!("LED ready on GPIO{}", LED_GPIO_PIN);

    // Boot zählen und Wakeup-Ursache per LED anzeigen
    let mut boot_count = RtcBootCount::new();
    let reporter = WakeupReporter::new(REPORTER_CONFIG);
    let report = reporter.run(&mut led, &mut delay, &mut boot_count, cause);
    if report.led_errors > 0 {
        warn!("{} LED writes failed during wakeup report", report.led_errors);
    }

    // Optionaler LED-Selbsttest nach Kaltstart
    #[cfg(feature = "spectrum-sweep")]
    if !report.cause.is_deep_sleep() {
        use esp_wakeup_spektrum::config::{SPECTRUM_SCALE, SWEEP_BRIGHTNESS, SWEEP_STEP_MS};
        use esp_wakeup_spektrum::{ColorSpectrum, sweep_spectrum};

        let mut spectrum = ColorSpectrum::new(SPECTRUM_SCALE);
        let failures = sweep_spectrum(
            &mut led,
            &mut delay,
            &mut spectrum,
            SWEEP_BRIGHTNESS,
            SWEEP_STEP_MS,
        );
        if failures > 0 {
            warn!("Spectrum sweep: {} LED writes failed", failures);
        }
    }

    // Wakeup-Quellen scharf schalten und schlafen
    // GPIO1 muss zu WAKEUP_GPIO_PIN in config.rs passen
    enter_deep_sleep(peripherals.LPWR, peripherals.GPIO1, &report.sleep)
}
