//! Fixed-capacity switch registry.
//!
//! Records live in a `heapless::Vec` arena sized by the const generic `N`.
//! The runtime capacity chosen at construction may be smaller than `N`;
//! asking for more than `N` is the registry's allocation failure.
//! Registration is append-only, so a [`SwitchId`] stays valid for the
//! registry's whole lifetime.

use heapless::Vec;

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::diagnostics::Diagnostics;
use crate::error::Error;
use crate::io::{DigitalIo, PinId, PinMode, PinState};
use crate::switch::{Circuit, SwitchId, SwitchKind, SwitchRecord};

/// Owner of every switch record and of the shared debounce window.
pub struct SwitchRegistry<const N: usize> {
    records: Vec<SwitchRecord, N>,
    capacity: usize,
    debounce_ms: u32,
}

impl<const N: usize> SwitchRegistry<N> {
    /// Reserve `capacity` switch slots.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity > N {
            warn!("Registry: {} slots requested, {} available", capacity, N);
            return Err(Error::AllocationFailure {
                requested: capacity,
                available: N,
            });
        }
        Ok(Self {
            records: Vec::new(),
            capacity,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        })
    }

    /// Register a switch and configure its input pin.
    ///
    /// C2 switches get the internal pull-up; C1 switches a plain input.
    pub fn add_switch(
        &mut self,
        kind: SwitchKind,
        input_pin: PinId,
        circuit: Circuit,
        io: &mut impl DigitalIo,
    ) -> Result<SwitchId, Error> {
        if self.records.len() >= self.capacity {
            warn!("Registry: full, pin {} not added", input_pin);
            return Err(Error::CapacityExceeded);
        }

        io.configure(input_pin, circuit.input_mode());

        let id = self.records.len();
        self.records
            .push(SwitchRecord::new(kind, input_pin, circuit))
            .map_err(|_| Error::CapacityExceeded)?;

        debug!(
            "Registry: switch {} = {:?} on pin {} ({:?})",
            id, kind, input_pin, circuit
        );
        Ok(id)
    }

    /// Register a switch from numeric kind/circuit codes.
    ///
    /// Codes follow [`SwitchKind::code`] and [`Circuit::code`]; anything
    /// else is rejected with [`Error::BadParams`] before any pin is touched.
    pub fn add_switch_from_codes(
        &mut self,
        kind: u8,
        input_pin: PinId,
        circuit: u8,
        io: &mut impl DigitalIo,
    ) -> Result<SwitchId, Error> {
        let (kind, circuit) = match (SwitchKind::try_from(kind), Circuit::try_from(circuit)) {
            (Ok(kind), Ok(circuit)) => (kind, circuit),
            _ => {
                warn!("Registry: bad params kind={} circuit={}", kind, circuit);
                return Err(Error::BadParams);
            }
        };
        self.add_switch(kind, input_pin, circuit, io)
    }

    /// Link switch `id` to `output_pin`, or unlink it when `output_pin` is 0.
    ///
    /// Linking configures the pin as an output and drives `level`.
    /// Unlinking drives `level` onto the previously linked pin one last
    /// time and then forgets it. Exactly one pin write on success.
    pub fn link_output(
        &mut self,
        id: SwitchId,
        output_pin: PinId,
        level: PinState,
        io: &mut impl DigitalIo,
    ) -> Result<(), Error> {
        let Some(record) = self.records.get_mut(id) else {
            warn!("Registry: link on unknown switch {}", id);
            return Err(Error::NotFound);
        };

        if output_pin == 0 {
            let Some(linked) = record.output_pin else {
                warn!("Registry: switch {} has no output to unlink", id);
                return Err(Error::NotFound);
            };
            io.write(linked, level);
            record.output_pin = None;
            record.output_level = level;
            debug!("Registry: switch {} unlinked from pin {}", id, linked);
        } else {
            io.configure(output_pin, PinMode::Output);
            io.write(output_pin, level);
            record.output_pin = Some(output_pin);
            record.output_level = level;
            debug!("Registry: switch {} linked to pin {}", id, output_pin);
        }
        Ok(())
    }

    /// Drive `final_level` onto switch `id`'s linked output and remove the link.
    pub fn unlink_output(
        &mut self,
        id: SwitchId,
        final_level: PinState,
        io: &mut impl DigitalIo,
    ) -> Result<(), Error> {
        self.link_output(id, 0, final_level, io)
    }

    /// Slots still available for registration.
    pub fn free_slots(&self) -> usize {
        self.capacity - self.records.len()
    }

    /// Change the debounce window for every switch.
    ///
    /// Negative values are ignored. The new window applies at the next
    /// elapsed-time check, including cycles already pending.
    pub fn set_debounce(&mut self, ms: i32) {
        if ms >= 0 {
            self.debounce_ms = ms as u32;
            info!("Registry: debounce window {} ms", self.debounce_ms);
        }
    }

    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: SwitchId) -> Option<&SwitchRecord> {
        self.records.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: SwitchId) -> Option<&mut SwitchRecord> {
        self.records.get_mut(id)
    }

    /// Registered switches in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (SwitchId, &SwitchRecord)> {
        self.records.iter().enumerate()
    }

    /// Settled state of a toggle; `None` for buttons and unknown ids.
    pub fn is_on(&self, id: SwitchId) -> Option<bool> {
        self.get(id).and_then(|r| r.status().as_on())
    }

    /// Hand one record to `sink`. Unknown ids are ignored.
    pub fn dump(&self, id: SwitchId, sink: &mut impl Diagnostics) {
        if let Some(record) = self.get(id) {
            sink.record(id, record);
        }
    }

    /// Hand every record to `sink`, preceded by a header call.
    pub fn dump_all(&self, sink: &mut impl Diagnostics) {
        sink.begin(self.len(), self.capacity, self.debounce_ms);
        for (id, record) in self.iter() {
            sink.record(id, record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switch::SwitchStatus;
    use crate::testing::FakeIo;

    #[test]
    fn capacity_beyond_backing_store_fails() {
        let err = SwitchRegistry::<4>::new(5).err();
        assert_eq!(
            err,
            Some(Error::AllocationFailure {
                requested: 5,
                available: 4
            })
        );
        assert!(SwitchRegistry::<4>::new(4).is_ok());
        assert!(SwitchRegistry::<4>::new(0).is_ok());
    }

    #[test]
    fn new_registry_defaults() {
        let reg = SwitchRegistry::<8>::new(3).unwrap();
        assert_eq!(reg.capacity(), 3);
        assert_eq!(reg.free_slots(), 3);
        assert!(reg.is_empty());
        assert_eq!(reg.debounce_ms(), DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn two_slot_scenario() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<8>::new(2).unwrap();

        assert_eq!(reg.add_switch(SwitchKind::Toggle, 5, Circuit::C1, &mut io), Ok(0));
        assert_eq!(reg.add_switch(SwitchKind::Button, 6, Circuit::C2, &mut io), Ok(1));
        assert_eq!(reg.free_slots(), 0);

        assert_eq!(
            reg.add_switch(SwitchKind::Button, 7, Circuit::C1, &mut io),
            Err(Error::CapacityExceeded)
        );
        assert_eq!(reg.len(), 2);
        assert_eq!(io.mode(7), None);
    }

    #[test]
    fn registration_configures_input_pull() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();

        reg.add_switch(SwitchKind::Toggle, 5, Circuit::C1, &mut io).unwrap();
        reg.add_switch(SwitchKind::Button, 6, Circuit::C2, &mut io).unwrap();

        assert_eq!(io.mode(5), Some(PinMode::Input));
        assert_eq!(io.mode(6), Some(PinMode::InputPullUp));
        assert!(io.writes.is_empty());
    }

    #[test]
    fn registration_fills_exactly_to_capacity() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<8>::new(5).unwrap();

        for expected in 0..5 {
            let id = reg
                .add_switch(SwitchKind::Button, 10 + expected as u8, Circuit::C2, &mut io)
                .unwrap();
            assert_eq!(id, expected);
            assert_eq!(reg.free_slots(), 5 - expected - 1);
        }
        for _ in 0..3 {
            assert_eq!(
                reg.add_switch(SwitchKind::Toggle, 30, Circuit::C1, &mut io),
                Err(Error::CapacityExceeded)
            );
            assert_eq!(reg.len(), 5);
        }
    }

    #[test]
    fn bad_codes_leave_registry_untouched() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();

        assert_eq!(reg.add_switch_from_codes(9, 5, 1, &mut io), Err(Error::BadParams));
        assert_eq!(reg.add_switch_from_codes(1, 5, 0, &mut io), Err(Error::BadParams));
        assert_eq!(reg.len(), 0);
        assert_eq!(io.mode(5), None);

        assert_eq!(reg.add_switch_from_codes(2, 5, 2, &mut io), Ok(0));
        let rec = reg.get(0).unwrap();
        assert_eq!(rec.kind(), SwitchKind::Toggle);
        assert_eq!(rec.circuit(), Circuit::C2);
    }

    #[test]
    fn bad_codes_win_over_full_registry() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<1>::new(0).unwrap();
        assert_eq!(reg.add_switch_from_codes(0, 5, 1, &mut io), Err(Error::BadParams));
        assert_eq!(reg.add_switch_from_codes(1, 5, 1, &mut io), Err(Error::CapacityExceeded));
    }

    #[test]
    fn link_output_configures_and_drives_pin() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();
        let id = reg.add_switch(SwitchKind::Toggle, 5, Circuit::C1, &mut io).unwrap();

        reg.link_output(id, 13, PinState::High, &mut io).unwrap();

        assert_eq!(io.mode(13), Some(PinMode::Output));
        assert_eq!(io.writes, vec![(13, PinState::High)]);
        let rec = reg.get(id).unwrap();
        assert_eq!(rec.output_pin(), Some(13));
        assert_eq!(rec.output_level(), PinState::High);
    }

    #[test]
    fn relink_moves_to_new_pin() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();
        let id = reg.add_switch(SwitchKind::Button, 6, Circuit::C2, &mut io).unwrap();

        reg.link_output(id, 13, PinState::Low, &mut io).unwrap();
        reg.link_output(id, 14, PinState::High, &mut io).unwrap();

        assert_eq!(io.writes, vec![(13, PinState::Low), (14, PinState::High)]);
        assert_eq!(reg.get(id).unwrap().output_pin(), Some(14));
    }

    #[test]
    fn link_unknown_switch_is_not_found() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();
        reg.add_switch(SwitchKind::Button, 6, Circuit::C2, &mut io).unwrap();

        assert_eq!(reg.link_output(1, 13, PinState::High, &mut io), Err(Error::NotFound));
        assert_eq!(reg.link_output(99, 13, PinState::High, &mut io), Err(Error::NotFound));
        assert!(io.writes.is_empty());
        assert_eq!(io.mode(13), None);
    }

    #[test]
    fn unlink_without_link_fails_without_write() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();
        let id = reg.add_switch(SwitchKind::Toggle, 5, Circuit::C1, &mut io).unwrap();

        assert_eq!(reg.link_output(id, 0, PinState::High, &mut io), Err(Error::NotFound));
        assert_eq!(reg.unlink_output(id, PinState::High, &mut io), Err(Error::NotFound));
        assert!(io.writes.is_empty());
    }

    #[test]
    fn unlink_writes_previous_pin_then_clears() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();
        let id = reg.add_switch(SwitchKind::Toggle, 5, Circuit::C1, &mut io).unwrap();
        reg.link_output(id, 13, PinState::Low, &mut io).unwrap();

        reg.link_output(id, 0, PinState::High, &mut io).unwrap();

        assert_eq!(io.last_write(), Some((13, PinState::High)));
        assert_eq!(io.writes.len(), 2);
        assert_eq!(reg.get(id).unwrap().output_pin(), None);

        // Nothing left to unlink.
        assert_eq!(reg.unlink_output(id, PinState::Low, &mut io), Err(Error::NotFound));
        assert_eq!(io.writes.len(), 2);
    }

    #[test]
    fn negative_debounce_is_ignored() {
        let mut reg = SwitchRegistry::<2>::new(2).unwrap();
        reg.set_debounce(50);
        assert_eq!(reg.debounce_ms(), 50);
        reg.set_debounce(-1);
        assert_eq!(reg.debounce_ms(), 50);
        reg.set_debounce(0);
        assert_eq!(reg.debounce_ms(), 0);
    }

    #[test]
    fn is_on_only_for_toggles() {
        let mut io = FakeIo::new();
        let mut reg = SwitchRegistry::<4>::new(4).unwrap();
        let toggle = reg.add_switch(SwitchKind::Toggle, 5, Circuit::C1, &mut io).unwrap();
        let button = reg.add_switch(SwitchKind::Button, 6, Circuit::C2, &mut io).unwrap();

        assert_eq!(reg.is_on(toggle), Some(false));
        assert_eq!(reg.is_on(button), None);
        assert_eq!(reg.is_on(7), None);
        assert_eq!(reg.get(button).unwrap().status(), SwitchStatus::Unused);
    }
}
