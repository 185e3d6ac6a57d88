//! Adafruit Feather nRF52840 Express.

use crate::board::button::{ButtonGroup, Pull};
use crate::board::identity::{BleIdentity, Uf2Identity, UsbIdentity};
use crate::board::led::{LedGroup, Level, Neopixel, RgbLed};
use crate::board::pin::Pin;
use crate::board::BoardDescriptor;

pub const BOARD: BoardDescriptor<'static> = BoardDescriptor {
    name: "feather_nrf52840_express",
    leds: LedGroup::simple(Pin::new(1, 15), Level::High)
        .with_secondary(Pin::new(1, 10))
        .with_rgb(
            RgbLed::Neopixel(Neopixel {
                data: Pin::new(0, 16),
                count: 1,
            }),
            0x0004_0404,
        ),
    buttons: ButtonGroup::new(Pull::Up, &[Pin::new(1, 2), Pin::new(0, 10)]),
    ble: BleIdentity {
        manufacturer: "Adafruit Industries",
        model: "Feather nRF52840 Express",
    },
    usb: UsbIdentity {
        vid: 0x239A,
        uf2_pid: 0x0029,
        cdc_only_pid: 0x002A,
    },
    uf2: Uf2Identity {
        product_name: "Adafruit Feather nRF52840 Express",
        volume_label: "FTHR840BOOT",
        board_id: "nRF52840-Feather-revD",
        index_url: "https://www.adafruit.com/product/4062",
    },
};
