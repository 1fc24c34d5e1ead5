//! nRF52840 implementations of the switch collaborators.
//!
//! [`FlexBank`] maps board pin ids onto Embassy `Flex` pins so the
//! registry can change a pin's direction at runtime. [`EmbassyClock`]
//! reads the Embassy time driver.

use defmt::warn;
use embassy_nrf::gpio::{Flex, Level, OutputDrive, Pull};
use embassy_time::Instant;
use ezswitch::{Clock, DigitalIo, PinId, PinMode, PinState};
use heapless::Vec;

/// Millisecond clock backed by the RTC1 time driver.
///
/// Truncated to `u32`; the debounce engine handles the wrap.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Fixed set of GPIO pins addressable by [`PinId`].
pub struct FlexBank<const N: usize> {
    pins: Vec<(PinId, Flex<'static>), N>,
}

impl<const N: usize> FlexBank<N> {
    pub fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Make `flex` reachable as `id`. Returns `false` when the bank is full.
    pub fn insert(&mut self, id: PinId, flex: Flex<'static>) -> bool {
        self.pins.push((id, flex)).is_ok()
    }

    fn pin(&mut self, id: PinId) -> Option<&mut Flex<'static>> {
        let pin = self
            .pins
            .iter_mut()
            .find(|(pin_id, _)| *pin_id == id)
            .map(|(_, flex)| flex);
        if pin.is_none() {
            warn!("Board: pin {} not in bank", id);
        }
        pin
    }
}

impl<const N: usize> DigitalIo for FlexBank<N> {
    fn configure(&mut self, pin: PinId, mode: PinMode) {
        if let Some(flex) = self.pin(pin) {
            match mode {
                PinMode::Input => flex.set_as_input(Pull::None),
                PinMode::InputPullUp => flex.set_as_input(Pull::Up),
                PinMode::Output => flex.set_as_output(OutputDrive::Standard),
            }
        }
    }

    fn read(&mut self, pin: PinId) -> PinState {
        match self.pin(pin) {
            Some(flex) if flex.is_high() => PinState::High,
            _ => PinState::Low,
        }
    }

    fn write(&mut self, pin: PinId, level: PinState) {
        if let Some(flex) = self.pin(pin) {
            flex.set_level(match level {
                PinState::Low => Level::Low,
                PinState::High => Level::High,
            });
        }
    }
}
