//! Convenience facade bundling a registry with its hardware collaborators.
//!
//! Host programs that own their pin bank and clock outright can hold a
//! single [`Switches`] value instead of threading `io` and `clock` through
//! every registry and engine call.

use crate::debounce::{self, Transition};
use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::io::{Clock, DigitalIo, PinId, PinState};
use crate::registry::SwitchRegistry;
use crate::switch::{Circuit, SwitchId, SwitchKind, SwitchRecord};

/// Switch registry plus the pin bank and clock it polls through.
pub struct Switches<IO, C, const N: usize> {
    registry: SwitchRegistry<N>,
    io: IO,
    clock: C,
}

impl<IO: DigitalIo, C: Clock, const N: usize> Switches<IO, C, N> {
    /// Reserve `capacity` slots (at most `N`).
    pub fn new(capacity: usize, io: IO, clock: C) -> Result<Self, Error> {
        Ok(Self {
            registry: SwitchRegistry::new(capacity)?,
            io,
            clock,
        })
    }

    pub fn add_switch(
        &mut self,
        kind: SwitchKind,
        input_pin: PinId,
        circuit: Circuit,
    ) -> Result<SwitchId, Error> {
        self.registry.add_switch(kind, input_pin, circuit, &mut self.io)
    }

    pub fn add_switch_from_codes(
        &mut self,
        kind: u8,
        input_pin: PinId,
        circuit: u8,
    ) -> Result<SwitchId, Error> {
        self.registry
            .add_switch_from_codes(kind, input_pin, circuit, &mut self.io)
    }

    /// See [`SwitchRegistry::link_output`]; `output_pin == 0` unlinks.
    pub fn link_output(
        &mut self,
        id: SwitchId,
        output_pin: PinId,
        level: PinState,
    ) -> Result<(), Error> {
        self.registry.link_output(id, output_pin, level, &mut self.io)
    }

    pub fn unlink_output(&mut self, id: SwitchId, final_level: PinState) -> Result<(), Error> {
        self.registry.unlink_output(id, final_level, &mut self.io)
    }

    /// Poll switch `id` once.
    pub fn poll(&mut self, id: SwitchId) -> Transition {
        debounce::poll(&mut self.registry, id, &mut self.io, &self.clock)
    }

    /// Poll every registered switch in id order, calling `on_switch` for
    /// each one that completed a transition.
    pub fn poll_all(&mut self, mut on_switch: impl FnMut(SwitchId, &SwitchRecord)) {
        for id in 0..self.registry.len() {
            if self.poll(id).is_switched() {
                if let Some(record) = self.registry.get(id) {
                    on_switch(id, record);
                }
            }
        }
    }

    pub fn free_slots(&self) -> usize {
        self.registry.free_slots()
    }

    pub fn set_debounce(&mut self, ms: i32) {
        self.registry.set_debounce(ms)
    }

    pub fn is_on(&self, id: SwitchId) -> Option<bool> {
        self.registry.is_on(id)
    }

    pub fn dump(&self, id: SwitchId, sink: &mut impl Diagnostics) {
        self.registry.dump(id, sink)
    }

    pub fn dump_all(&self, sink: &mut impl Diagnostics) {
        self.registry.dump_all(sink)
    }

    pub fn registry(&self) -> &SwitchRegistry<N> {
        &self.registry
    }

    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeClock, FakeIo};

    #[test]
    fn poll_all_reports_switched_ids() {
        let mut sw: Switches<FakeIo, FakeClock, 4> =
            Switches::new(3, FakeIo::new(), FakeClock::new()).unwrap();
        sw.set_debounce(5);
        let a = sw.add_switch(SwitchKind::Toggle, 1, Circuit::C1).unwrap();
        let b = sw.add_switch(SwitchKind::Toggle, 2, Circuit::C1).unwrap();
        let c = sw.add_switch(SwitchKind::Toggle, 3, Circuit::C1).unwrap();

        sw.io_mut().set(1, PinState::High);
        sw.io_mut().set(3, PinState::High);
        sw.poll_all(|_, _| panic!("nothing settled yet"));

        sw.clock().set(5);
        let mut seen = Vec::new();
        sw.poll_all(|id, rec| seen.push((id, rec.status().as_on())));
        assert_eq!(seen, vec![(a, Some(true)), (c, Some(true))]);
        assert_eq!(sw.is_on(b), Some(false));
    }

    #[test]
    fn construction_propagates_allocation_failure() {
        let res: Result<Switches<FakeIo, FakeClock, 2>, Error> =
            Switches::new(3, FakeIo::new(), FakeClock::new());
        assert!(matches!(res, Err(Error::AllocationFailure { .. })));
    }
}
