//! Switch record types.
//!
//! A [`SwitchRecord`] holds the immutable wiring of one switch (kind,
//! circuit, input pin) together with the runtime debounce state the
//! engine mutates while polling.

use crate::error::Error;
use crate::io::{PinId, PinMode, PinState};

/// Stable identifier handed out by the registry, `0..len`.
pub type SwitchId = usize;

/// Mechanical behaviour of a switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchKind {
    /// Momentary: one event per press-then-release cycle.
    Button,
    /// Maintained: one event per settled on/off change.
    Toggle,
}

impl SwitchKind {
    /// Numeric code accepted by `add_switch_from_codes`.
    pub const fn code(self) -> u8 {
        match self {
            SwitchKind::Button => 1,
            SwitchKind::Toggle => 2,
        }
    }
}

impl TryFrom<u8> for SwitchKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(SwitchKind::Button),
            2 => Ok(SwitchKind::Toggle),
            _ => Err(Error::BadParams),
        }
    }
}

/// Wiring polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Circuit {
    /// Switch pulls the pin HIGH when closed (external pull-down).
    C1,
    /// Switch pulls the pin LOW when closed (internal pull-up).
    C2,
}

impl Circuit {
    /// Numeric code accepted by `add_switch_from_codes`.
    pub const fn code(self) -> u8 {
        match self {
            Circuit::C1 => 1,
            Circuit::C2 => 2,
        }
    }

    /// Electrical level that means "pressed" / "on".
    pub const fn active_level(self) -> PinState {
        match self {
            Circuit::C1 => PinState::High,
            Circuit::C2 => PinState::Low,
        }
    }

    /// How the input pin must be configured for this wiring.
    pub const fn input_mode(self) -> PinMode {
        match self {
            Circuit::C1 => PinMode::Input,
            Circuit::C2 => PinMode::InputPullUp,
        }
    }
}

impl TryFrom<u8> for Circuit {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Circuit::C1),
            2 => Ok(Circuit::C2),
            _ => Err(Error::BadParams),
        }
    }
}

/// Settled logical state of a switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchStatus {
    /// Buttons report events, not a level.
    Unused,
    Off,
    On,
}

impl SwitchStatus {
    pub fn from_on(on: bool) -> Self {
        if on {
            SwitchStatus::On
        } else {
            SwitchStatus::Off
        }
    }

    /// `Some(on)` for toggles, `None` for buttons.
    pub fn as_on(self) -> Option<bool> {
        match self {
            SwitchStatus::Unused => None,
            SwitchStatus::Off => Some(false),
            SwitchStatus::On => Some(true),
        }
    }
}

/// Configuration and debounce state of one registered switch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchRecord {
    pub(crate) kind: SwitchKind,
    pub(crate) circuit: Circuit,
    pub(crate) input_pin: PinId,
    pub(crate) active_level: PinState,
    pub(crate) status: SwitchStatus,
    pub(crate) pending: bool,
    pub(crate) pending_since: u32,
    pub(crate) output_pin: Option<PinId>,
    pub(crate) output_level: PinState,
}

impl SwitchRecord {
    /// A freshly registered, settled switch with no output linked.
    pub(crate) fn new(kind: SwitchKind, input_pin: PinId, circuit: Circuit) -> Self {
        Self {
            kind,
            circuit,
            input_pin,
            active_level: circuit.active_level(),
            status: match kind {
                SwitchKind::Button => SwitchStatus::Unused,
                SwitchKind::Toggle => SwitchStatus::Off,
            },
            pending: false,
            pending_since: 0,
            output_pin: None,
            output_level: PinState::Low,
        }
    }

    pub fn kind(&self) -> SwitchKind {
        self.kind
    }

    pub fn circuit(&self) -> Circuit {
        self.circuit
    }

    pub fn input_pin(&self) -> PinId {
        self.input_pin
    }

    pub fn active_level(&self) -> PinState {
        self.active_level
    }

    pub fn status(&self) -> SwitchStatus {
        self.status
    }

    /// `true` while a detected change is being timed out.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Timestamp (ms) at which the current or most recent debounce cycle started.
    pub fn pending_since(&self) -> u32 {
        self.pending_since
    }

    pub fn output_pin(&self) -> Option<PinId> {
        self.output_pin
    }

    /// Last level driven to the linked output.
    pub fn output_level(&self) -> PinState {
        self.output_level
    }
}
