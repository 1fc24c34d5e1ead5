//! Read-only dumps of switch records for debugging.
//!
//! The registry hands records to a [`Diagnostics`] sink; it never mutates
//! anything on the way. Two sinks are provided: [`FmtDiagnostics`] writes
//! text lines into any `core::fmt::Write`, and `DefmtDiagnostics` (with
//! the `defmt` feature) logs each record on target.

use core::fmt::{self, Write};

use crate::io::PinState;
use crate::switch::{SwitchId, SwitchRecord};

/// Receiver for registry dumps.
pub trait Diagnostics {
    /// Called once before a full dump.
    fn begin(&mut self, _count: usize, _capacity: usize, _debounce_ms: u32) {}

    fn record(&mut self, id: SwitchId, record: &SwitchRecord);
}

fn level_str(level: PinState) -> &'static str {
    match level {
        PinState::Low => "LOW",
        PinState::High => "HIGH",
    }
}

/// One-line text rendering of a record.
pub struct RecordLine<'a> {
    pub id: SwitchId,
    pub record: &'a SwitchRecord,
}

impl fmt::Display for RecordLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        write!(
            f,
            "switch {}: {:?} pin={} circuit={:?} active={} status={:?} pending={} since={}",
            self.id,
            r.kind(),
            r.input_pin(),
            r.circuit(),
            level_str(r.active_level()),
            r.status(),
            r.is_pending(),
            r.pending_since(),
        )?;
        match r.output_pin() {
            Some(pin) => write!(f, " output={} level={}", pin, level_str(r.output_level())),
            None => f.write_str(" output=-"),
        }
    }
}

/// Text sink over any `core::fmt::Write`, one line per record.
///
/// Write errors are dropped; diagnostics must never disturb the caller.
pub struct FmtDiagnostics<W: Write> {
    out: W,
}

impl<W: Write> FmtDiagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Diagnostics for FmtDiagnostics<W> {
    fn begin(&mut self, count: usize, capacity: usize, debounce_ms: u32) {
        let _ = writeln!(
            self.out,
            "switches: {}/{} registered, debounce {} ms",
            count, capacity, debounce_ms
        );
    }

    fn record(&mut self, id: SwitchId, record: &SwitchRecord) {
        let _ = writeln!(self.out, "{}", RecordLine { id, record });
    }
}

/// Logs every record through `defmt::info!`.
#[cfg(feature = "defmt")]
pub struct DefmtDiagnostics;

#[cfg(feature = "defmt")]
impl Diagnostics for DefmtDiagnostics {
    fn begin(&mut self, count: usize, capacity: usize, debounce_ms: u32) {
        defmt::info!(
            "Switches: {}/{} registered, debounce {} ms",
            count,
            capacity,
            debounce_ms
        );
    }

    fn record(&mut self, id: SwitchId, record: &SwitchRecord) {
        defmt::info!("Switch {}: {}", id, record);
    }
}
