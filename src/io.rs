//! Hardware collaborators consumed by the registry and debounce engine.
//!
//! The core never touches GPIO registers or timers directly. A board
//! support layer implements [`DigitalIo`] and [`Clock`]; host tests use
//! fakes.

pub use embedded_hal::digital::PinState;

/// Board-level pin identifier.
///
/// Pin `0` is reserved at the output-link boundary to mean "no output".
pub type PinId = u8;

/// Direction / pull configuration applied to a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Floating input (circuit C1 switches).
    Input,
    /// Input with the internal pull-up enabled (circuit C2 switches).
    InputPullUp,
    /// Push-pull output (linked indicator pins).
    Output,
}

/// Pin-addressed digital I/O.
pub trait DigitalIo {
    /// Set the direction of `pin`.
    fn configure(&mut self, pin: PinId, mode: PinMode);

    /// Sample the electrical level of `pin`.
    fn read(&mut self, pin: PinId) -> PinState;

    /// Drive `pin` to `level`.
    fn write(&mut self, pin: PinId, level: PinState);
}

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    fn configure(&mut self, pin: PinId, mode: PinMode) {
        (**self).configure(pin, mode)
    }

    fn read(&mut self, pin: PinId) -> PinState {
        (**self).read(pin)
    }

    fn write(&mut self, pin: PinId, level: PinState) {
        (**self).write(pin, level)
    }
}

/// Millisecond time source.
///
/// Must be monotonically non-decreasing apart from wrapping at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now`, tolerant of clock wrap.
#[inline]
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
