//! Polling debounce and registry for physical switches.
//!
//! Buttons and toggle switches, wired either active-high (circuit C1) or
//! active-low with a pull-up (circuit C2), are registered once into a
//! fixed-capacity [`SwitchRegistry`] and then polled by id. Each poll
//! samples the pin, advances that switch's debounce state and reports
//! whether a debounced transition completed. A switch may be linked to an
//! output pin that flips on every accepted transition.
//!
//! Hardware is reached only through the [`DigitalIo`] and [`Clock`] traits,
//! so everything here runs on the host: `cargo test --lib`.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies nRF52840 implementations of both traits.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to later modules.
#[macro_use]
mod fmt;

pub mod config;
pub mod debounce;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod registry;
pub mod switch;
pub mod switches;

#[cfg(test)]
mod testing;

// ═══════════════════════════════════════════════════════════════════════════
// Public re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use debounce::{poll, Transition};
#[cfg(feature = "defmt")]
pub use diagnostics::DefmtDiagnostics;
pub use diagnostics::{Diagnostics, FmtDiagnostics, RecordLine};
pub use error::Error;
pub use io::{Clock, DigitalIo, PinId, PinMode, PinState};
pub use registry::SwitchRegistry;
pub use switch::{Circuit, SwitchId, SwitchKind, SwitchRecord, SwitchStatus};
pub use switches::Switches;
