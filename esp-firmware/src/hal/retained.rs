// Boot-Zähler im RTC-Fast-RAM
//
// Der Wert überlebt Deep Sleep (der Bootloader lädt RTC-Daten nur beim
// Kaltstart), geht aber bei Stromverlust verloren und startet dann bei 0.
//
// Flüchtiger Zustand (z.B. der Spektrum-Index) liegt dagegen im normalen
// RAM und beginnt nach jedem Wakeup neu.

use core::sync::atomic::{AtomicU32, Ordering};

use esp_core::BootCountStore;

#[esp_hal::ram(unstable(rtc_fast))]
static BOOT_COUNT: AtomicU32 = AtomicU32::new(0);

/// Zugriff auf den Boot-Zähler im RTC-RAM
///
/// Nur ein Handle existiert (in main), daher reicht Relaxed Ordering.
pub struct RtcBootCount {
    _private: (),
}

impl RtcBootCount {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for RtcBootCount {
    fn default() -> Self {
        Self::new()
    }
}

impl BootCountStore for RtcBootCount {
    fn load(&self) -> u32 {
        BOOT_COUNT.load(Ordering::Relaxed)
    }

    fn store(&mut self, value: u32) {
        BOOT_COUNT.store(value, Ordering::Relaxed);
    }
}
