// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die echte Hardware:
// LED (RMT), Dwell (Delay), Boot-Zähler (RTC-RAM) und Deep Sleep.

pub mod delay;
pub mod led_writer;
pub mod retained;
pub mod sleep;

pub use led_writer::{LED_BUFFER_SIZE, RmtLedWriter};
pub use retained::RtcBootCount;
pub use sleep::{enter_deep_sleep, raw_wakeup_cause};
