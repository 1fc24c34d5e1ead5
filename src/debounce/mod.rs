//! Debounce engine.
//!
//! Each call to [`poll`] samples one switch's input pin, advances that
//! switch's two-state machine (settled / pending) and reports whether a
//! debounced transition completed on this call. Nothing happens between
//! calls; timing is an elapsed-time comparison against the registry's
//! debounce window, read fresh on every check.
//!
//! - **Toggles** report both on→off and off→on.
//! - **Buttons** report one event per complete press→release cycle.
//!
//! When a transition is accepted and the switch has a linked output, the
//! output is flipped to the complement of the level last driven.

mod button;
mod toggle;


use crate::io::{Clock, DigitalIo};
use crate::registry::SwitchRegistry;
use crate::switch::{SwitchId, SwitchKind, SwitchRecord};

/// Outcome of a single poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Transition {
    /// A debounced transition was accepted on this call.
    Switched,
    /// Nothing completed: idle, still waiting out the window, or unknown switch.
    Unchanged,
}

impl Transition {
    pub fn is_switched(self) -> bool {
        matches!(self, Transition::Switched)
    }
}

impl From<Transition> for bool {
    fn from(t: Transition) -> bool {
        t.is_switched()
    }
}

/// Poll switch `id` once.
///
/// Unknown ids report [`Transition::Unchanged`] without touching any pin.
pub fn poll<const N: usize>(
    registry: &mut SwitchRegistry<N>,
    id: SwitchId,
    io: &mut impl DigitalIo,
    clock: &impl Clock,
) -> Transition {
    let window_ms = registry.debounce_ms();
    let Some(record) = registry.get_mut(id) else {
        return Transition::Unchanged;
    };

    let transition = match record.kind {
        SwitchKind::Button => button::read(record, io, clock, window_ms),
        SwitchKind::Toggle => toggle::read(record, io, clock, window_ms),
    };

    if transition.is_switched() {
        trace!("Debounce: switch {} switched ({:?})", id, record.status);
        mirror_output(record, io);
    }
    transition
}

/// Flip the linked output, if any.
fn mirror_output(record: &mut SwitchRecord, io: &mut impl DigitalIo) {
    if let Some(pin) = record.output_pin {
        record.output_level = !record.output_level;
        io.write(pin, record.output_level);
    }
}
