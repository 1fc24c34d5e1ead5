//! Application-wide constants and compile-time configuration.
//!
//! Timing defaults and the demo board's pin assignments live here so
//! they can be tuned in one place.

// Debounce

/// Debounce window applied to every switch until `set_debounce` is called (ms).
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// How often the firmware polls the registered switches (ms).
pub const POLL_INTERVAL_MS: u64 = 1;

// Registry

/// Backing-store size of the firmware's switch registry.
pub const MAX_SWITCHES: usize = 8;

/// Depth of the channel carrying switch events from the poll task.
pub const EVENT_QUEUE_DEPTH: usize = 4;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Pin ids are `port * 32 + pin`. Buttons and LEDs on the DK are both
// active-low, so buttons are wired as circuit C2 and an LED is lit by
// driving it Low.
//
//   Button 1 → P0.11      LED 1 → P0.13
//   Button 2 → P0.12      LED 2 → P0.14
//   Button 3 → P0.24      LED 3 → P0.15
//   Button 4 → P0.25      LED 4 → P0.16
//
// P0.00 is the 32 kHz crystal on the DK. Pin id 0 doubles as "no output
// linked", so it is never used as an output here.

pub const PIN_BUTTON_1: u8 = 11;
pub const PIN_BUTTON_2: u8 = 12;
pub const PIN_BUTTON_3: u8 = 24;
pub const PIN_BUTTON_4: u8 = 25;

pub const PIN_LED_1: u8 = 13;
pub const PIN_LED_2: u8 = 14;
pub const PIN_LED_3: u8 = 15;
pub const PIN_LED_4: u8 = 16;

/// Debounce window used for the DK's tactile buttons and slide switches (ms).
pub const BOARD_DEBOUNCE_MS: i32 = 20;
