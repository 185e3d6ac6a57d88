//! Adafruit ItsyBitsy nRF52840 Express.
//!
//! Red status LED on P0.06 and one DotStar; the user switch doubles as
//! the DFU button.

use crate::board::button::{ButtonGroup, Pull};
use crate::board::identity::{BleIdentity, Uf2Identity, UsbIdentity};
use crate::board::led::{Apa102, LedGroup, Level, RgbLed};
use crate::board::pin::Pin;
use crate::board::BoardDescriptor;

pub const BOARD: BoardDescriptor<'static> = BoardDescriptor {
    name: "itsybitsy_nrf52840_express",
    leds: LedGroup::simple(Pin::new(0, 6), Level::High).with_rgb(
        RgbLed::Apa102(Apa102 {
            clock: Pin::new(1, 9),
            data: Pin::new(0, 8),
            brightness: 0x1,
            count: 1,
        }),
        // Full mask so colour information is not clipped; the DotStar's own
        // 5-bit brightness does the dimming.
        0xFFFF_FFFF,
    ),
    buttons: ButtonGroup::new(
        Pull::Up,
        &[
            Pin::new(0, 29), // user switch
            Pin::new(1, 2),  // D2 breakout
        ],
    ),
    ble: BleIdentity {
        manufacturer: "Adafruit Industries",
        model: "ItsyBitsy nRF52840 Express",
    },
    usb: UsbIdentity {
        vid: 0x239A,
        uf2_pid: 0x0051,
        cdc_only_pid: 0x0052,
    },
    uf2: Uf2Identity {
        product_name: "Adafruit ItsyBitsy nRF52840 Express",
        volume_label: "ITSY840BOOT",
        board_id: "nRF52840-ItsyBitsy-revA",
        index_url: "https://www.adafruit.com/",
    },
};
