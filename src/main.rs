//! ezswitch demo firmware for the nRF52840-DK.
//!
//! Buttons 1 and 2 are registered as momentary buttons, 3 and 4 as toggle
//! switches (all active-low, circuit C2). Each drives one of the DK's LEDs
//! through an output link, so LED 1/2 flip on every press-release cycle
//! and LED 3/4 follow the toggles' debounced state.
//!
//! A single task polls the registry and publishes switch events on a
//! channel; the main task logs them over RTT.

#![no_std]
#![no_main]

mod board;

use board::{EmbassyClock, FlexBank};
use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Flex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Timer};
use ezswitch::config::*;
use ezswitch::{Circuit, DefmtDiagnostics, PinState, SwitchId, SwitchKind, SwitchStatus, Switches};
use {defmt_rtt as _, panic_probe as _};

/// GPIOs handed to the pin bank: four buttons plus four LEDs.
const BANK_PINS: usize = 8;

/// Switch whose press also dumps the whole registry.
const DUMP_SWITCH: SwitchId = 0;

type BoardSwitches = Switches<FlexBank<BANK_PINS>, EmbassyClock, MAX_SWITCHES>;
type EventSender = Sender<'static, CriticalSectionRawMutex, SwitchEvent, EVENT_QUEUE_DEPTH>;

/// A debounced transition reported by the poll task.
#[derive(Clone, Copy, defmt::Format)]
struct SwitchEvent {
    id: SwitchId,
    kind: SwitchKind,
    status: SwitchStatus,
}

static EVENTS: Channel<CriticalSectionRawMutex, SwitchEvent, EVENT_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("ezswitch starting");

    let mut bank = FlexBank::<BANK_PINS>::new();
    bank.insert(PIN_BUTTON_1, Flex::new(p.P0_11));
    bank.insert(PIN_BUTTON_2, Flex::new(p.P0_12));
    bank.insert(PIN_BUTTON_3, Flex::new(p.P0_24));
    bank.insert(PIN_BUTTON_4, Flex::new(p.P0_25));
    bank.insert(PIN_LED_1, Flex::new(p.P0_13));
    bank.insert(PIN_LED_2, Flex::new(p.P0_14));
    bank.insert(PIN_LED_3, Flex::new(p.P0_15));
    bank.insert(PIN_LED_4, Flex::new(p.P0_16));

    let mut switches = match BoardSwitches::new(MAX_SWITCHES, bank, EmbassyClock) {
        Ok(s) => s,
        Err(e) => defmt::panic!("Switch registry: {}", e),
    };
    switches.set_debounce(BOARD_DEBOUNCE_MS);

    let wiring = [
        (SwitchKind::Button, PIN_BUTTON_1, PIN_LED_1),
        (SwitchKind::Button, PIN_BUTTON_2, PIN_LED_2),
        (SwitchKind::Toggle, PIN_BUTTON_3, PIN_LED_3),
        (SwitchKind::Toggle, PIN_BUTTON_4, PIN_LED_4),
    ];
    for (kind, input, led) in wiring {
        let id = unwrap!(switches.add_switch(kind, input, Circuit::C2));
        // DK LEDs are active-low: start them dark.
        unwrap!(switches.link_output(id, led, PinState::High));
    }
    info!("Switches: {} free slots", switches.free_slots());
    switches.dump_all(&mut DefmtDiagnostics);

    unwrap!(spawner.spawn(switch_task(switches, EVENTS.sender())));

    loop {
        let event = EVENTS.receive().await;
        match event.status.as_on() {
            Some(on) => info!("Toggle {} ({:?}) -> {}", event.id, event.kind, on),
            None => info!("Button {} pressed", event.id),
        }
    }
}

/// Poll every switch each `POLL_INTERVAL_MS` and publish transitions.
#[embassy_executor::task]
async fn switch_task(mut switches: BoardSwitches, tx: EventSender) -> ! {
    loop {
        let mut dump = false;
        switches.poll_all(|id, record| {
            let event = SwitchEvent {
                id,
                kind: record.kind(),
                status: record.status(),
            };
            if tx.try_send(event).is_err() {
                warn!("Switch {}: event queue full, dropped", id);
            }
            dump |= id == DUMP_SWITCH;
        });

        if dump {
            switches.dump_all(&mut DefmtDiagnostics);
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}
