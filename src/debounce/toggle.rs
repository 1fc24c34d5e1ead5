//! Maintained (toggle) switch debouncing.
//!
//! The first detected difference between the normalised reading and the
//! settled state arms the timer. Later bounces, including a return to the
//! original level, neither cancel nor re-arm it: once the window has
//! elapsed from the first change, the settled state flips.

use super::Transition;
use crate::io::{elapsed_ms, Clock, DigitalIo, PinState};
use crate::switch::{Circuit, SwitchRecord, SwitchStatus};

pub(super) fn read(
    record: &mut SwitchRecord,
    io: &mut impl DigitalIo,
    clock: &impl Clock,
    window_ms: u32,
) -> Transition {
    let mut on = io.read(record.input_pin) == PinState::High;
    if record.circuit == Circuit::C2 {
        on = !on;
    }

    if SwitchStatus::from_on(on) != record.status && !record.pending {
        record.pending = true;
        record.pending_since = clock.now_ms();
    }

    if record.pending && elapsed_ms(clock.now_ms(), record.pending_since) >= window_ms {
        let settled = record.status == SwitchStatus::On;
        record.status = SwitchStatus::from_on(!settled);
        record.pending = false;
        return Transition::Switched;
    }

    Transition::Unchanged
}
