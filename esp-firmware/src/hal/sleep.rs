// Deep Sleep: Wakeup-Quellen scharf schalten und schlafen
//
// Auf dem ESP32-C6 gibt es kein EXT0. Der externe Wakeup läuft über
// die LP-IO Pins (EXT1), ein Wakeup darüber meldet sich als EXT1.

use defmt::info;
use esp_core::{SleepPlan, WakeLevel};
use esp_hal::gpio::RtcPinWithResistors;
use esp_hal::rtc_cntl::Rtc;
use esp_hal::rtc_cntl::sleep::{Ext1WakeupSource, TimerWakeupSource, WakeupLevel};

/// Ursache des letzten Wakeups als Rohwert der Plattform
///
/// Nummerierung wie `WakeupCause::from_raw()` sie erwartet
/// (0 = undefiniert, 2 = EXT0, 3 = EXT1, 4 = Timer, ...).
pub fn raw_wakeup_cause() -> u32 {
    esp_hal::rtc_cntl::wakeup_cause() as u32
}

fn wakeup_level(level: WakeLevel) -> WakeupLevel {
    match level {
        WakeLevel::Low => WakeupLevel::Low,
        WakeLevel::High => WakeupLevel::High,
    }
}

/// Schaltet Wakeup-Quelle A (Pin) und B (Timer) scharf und geht in Deep Sleep
///
/// Kehrt nie zurück. Nach dem Wakeup startet die Firmware von vorn.
///
/// # Parameter
/// - `lpwr`: LPWR Peripheral (RTC Controller)
/// - `wake_pin`: LP-IO Pin für Wakeup-Quelle A (muss `plan.ext_wakeup.gpio` sein)
/// - `plan`: Wakeup-Quellen aus dem Wakeup-Report
pub fn enter_deep_sleep<P>(
    lpwr: esp_hal::peripherals::LPWR<'_>,
    mut wake_pin: P,
    plan: &SleepPlan,
) -> !
where
    P: RtcPinWithResistors,
{
    let mut rtc = Rtc::new(lpwr);

    let mut wakeup_pins: [(&mut dyn RtcPinWithResistors, WakeupLevel); 1] =
        [(&mut wake_pin, wakeup_level(plan.ext_wakeup.level))];
    let ext1 = Ext1WakeupSource::new(&mut wakeup_pins);
    info!(
        "Wakeup source A: GPIO{} ({})",
        plan.ext_wakeup.gpio,
        match plan.ext_wakeup.level {
            WakeLevel::Low => "low",
            WakeLevel::High => "high",
        }
    );

    let timer = TimerWakeupSource::new(plan.timer);
    info!("Wakeup source B: timer ({} s)", plan.timer.as_secs());

    rtc.sleep_deep(&[&ext1, &timer])
}
