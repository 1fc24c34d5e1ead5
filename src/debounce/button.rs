//! Momentary (button) switch debouncing.
//!
//! Every poll that sees the pin at its active level restarts the pending
//! cycle. The event fires on the first released poll at least one window
//! after the last pressed poll. A held button never fires, and a cycle
//! stays pending until a release is seen late enough.

use super::Transition;
use crate::io::{elapsed_ms, Clock, DigitalIo};
use crate::switch::SwitchRecord;

pub(super) fn read(
    record: &mut SwitchRecord,
    io: &mut impl DigitalIo,
    clock: &impl Clock,
    window_ms: u32,
) -> Transition {
    let level = io.read(record.input_pin);
    let now = clock.now_ms();

    if level == record.active_level {
        record.pending = true;
        record.pending_since = now;
        return Transition::Unchanged;
    }

    if record.pending && elapsed_ms(now, record.pending_since) >= window_ms {
        record.pending = false;
        return Transition::Switched;
    }

    Transition::Unchanged
}
