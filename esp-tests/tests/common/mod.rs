//! Gemeinsame Mocks für die Host-Tests

#![allow(dead_code)]

use esp_core::{BootCountStore, Dwell, LedError, SmartLedWriter};
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    /// Alle geschriebenen Farben in Reihenfolge
    pub writes: Vec<RGB8>,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: bool,
    /// Simuliere Fehler bei jedem write()
    pub fail_always: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_color(&self) -> Option<RGB8> {
        self.writes.last().copied()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_always || self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.writes.push(color);
        Ok(())
    }
}

// ============================================================================
// Mock Dwell
// ============================================================================

#[derive(Default)]
pub struct MockDwell {
    pub pauses_ms: Vec<u32>,
}

impl Dwell for MockDwell {
    fn dwell_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
    }
}

// ============================================================================
// In-Memory Boot Counter (statt RTC-RAM)
// ============================================================================

#[derive(Default)]
pub struct MemoryBootCount {
    pub value: u32,
}

impl MemoryBootCount {
    pub fn with_value(value: u32) -> Self {
        Self { value }
    }
}

impl BootCountStore for MemoryBootCount {
    fn load(&self) -> u32 {
        self.value
    }

    fn store(&mut self, value: u32) {
        self.value = value;
    }
}
