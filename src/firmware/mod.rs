//! Board bring-up firmware - drives a board purely from its descriptor.
//!
//! ## Components
//!
//! - **Status**: heartbeat on the primary (and secondary) LED
//! - **Buttons**: one debounced task per declared button
//! - **Indicator**: APA102 colour per button press
//! - **USB**: CDC-ACM device with the board's CDC-only identity

pub mod buttons;
pub mod indicator;
pub mod status;
pub mod usb;

use embassy_nrf::gpio::{self, AnyPin};
use uf2_boards::board::button::Pull;
use uf2_boards::board::led::Level;
use uf2_boards::board::pin::Pin;

/// Claim the GPIO a descriptor pin refers to.
///
/// # Safety
///
/// Each pin must be claimed once. A validated descriptor never assigns one
/// physical pin to two functions, and `main` claims each field once.
pub unsafe fn claim(pin: Pin) -> AnyPin {
    AnyPin::steal(pin.raw() as u8)
}

pub fn level(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}

pub fn pull(pull: Pull) -> gpio::Pull {
    match pull {
        Pull::Up => gpio::Pull::Up,
        Pull::Down => gpio::Pull::Down,
        Pull::None => gpio::Pull::None,
    }
}
