// Blockierende Dwell Time über den esp-hal Delay
//
// Der Wakeup-Ablauf ist single-threaded, es gibt keine anderen Tasks,
// daher blockierendes Warten statt Embassy Timer.

use esp_core::Dwell;
use esp_hal::delay::Delay;

impl Dwell for Delay {
    fn dwell_ms(&mut self, ms: u32) {
        self.delay_millis(ms);
    }
}
