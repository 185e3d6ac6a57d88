//! Board descriptor - everything board-specific a UF2 bootloader build needs.
//!
//! A descriptor is an immutable record grouping four categories:
//!
//! - **LEDs**: status LED pins, on-level, optional addressable RGB LED
//! - **Buttons**: button pins and their shared pull configuration
//! - **BLE**: Device Information Service strings
//! - **USB / UF2**: VID/PIDs and the strings shown on the UF2 drive
//!
//! Registered boards are `BoardDescriptor<'static>`; descriptors parsed from
//! a build-config file borrow their strings from the file text.

pub mod button;
pub mod identity;
pub mod led;
pub mod pin;
pub mod validate;

#[cfg(test)]
mod tests;

pub use crate::error::Field;
use button::ButtonGroup;
use identity::{BleIdentity, Uf2Identity, UsbIdentity};
use led::{LedGroup, RgbLed};
use pin::{Chip, Pin};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardDescriptor<'a> {
    /// Build target name, e.g. `itsybitsy_nrf52840_express`.
    pub name: &'a str,
    pub leds: LedGroup,
    pub buttons: ButtonGroup,
    pub ble: BleIdentity<'a>,
    pub usb: UsbIdentity,
    pub uf2: Uf2Identity<'a>,
}

impl<'a> BoardDescriptor<'a> {
    /// Chip named by the board ID, if recognised.
    pub fn chip(&self) -> Option<Chip> {
        Chip::from_board_id(self.uf2.board_id)
    }

    /// Every pin the board assigns, tagged with the field assigning it.
    pub fn pins(&self) -> impl Iterator<Item = (Field, Pin)> + '_ {
        let leds = [
            Some((Field::LedPrimaryPin, self.leds.primary)),
            self.leds.secondary.map(|p| (Field::LedSecondaryPin, p)),
        ];
        let rgb = match self.leds.rgb {
            Some(RgbLed::Apa102(a)) => [
                Some((Field::LedApa102Clk, a.clock)),
                Some((Field::LedApa102Data, a.data)),
            ],
            Some(RgbLed::Neopixel(n)) => [Some((Field::LedNeopixel, n.data)), None],
            None => [None, None],
        };
        let buttons = self
            .buttons
            .pins()
            .iter()
            .enumerate()
            .map(|(i, &pin)| (Field::Button(i as u8 + 1), pin));

        leds.into_iter().chain(rgb).flatten().chain(buttons)
    }
}
