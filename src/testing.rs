//! Host-side test doubles for the hardware collaborators.

use core::cell::Cell;

use crate::io::{Clock, DigitalIo, PinId, PinMode, PinState};

const PIN_COUNT: usize = 64;

/// Scripted pin levels plus a log of every configure/write call.
pub struct FakeIo {
    levels: [PinState; PIN_COUNT],
    pub modes: [Option<PinMode>; PIN_COUNT],
    pub writes: Vec<(PinId, PinState)>,
    pub reads: usize,
}

impl FakeIo {
    pub fn new() -> Self {
        Self {
            levels: [PinState::Low; PIN_COUNT],
            modes: [None; PIN_COUNT],
            writes: Vec::new(),
            reads: 0,
        }
    }

    pub fn set(&mut self, pin: PinId, level: PinState) {
        self.levels[pin as usize] = level;
    }

    pub fn mode(&self, pin: PinId) -> Option<PinMode> {
        self.modes[pin as usize]
    }

    pub fn last_write(&self) -> Option<(PinId, PinState)> {
        self.writes.last().copied()
    }
}

impl DigitalIo for FakeIo {
    fn configure(&mut self, pin: PinId, mode: PinMode) {
        self.modes[pin as usize] = Some(mode);
    }

    fn read(&mut self, pin: PinId) -> PinState {
        self.reads += 1;
        self.levels[pin as usize]
    }

    fn write(&mut self, pin: PinId, level: PinState) {
        self.levels[pin as usize] = level;
        self.writes.push((pin, level));
    }
}

/// Manually advanced millisecond clock.
pub struct FakeClock {
    now: Cell<u32>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
