//! Nordic nRF52840-DK (PCA10056). LEDs are active-low.

use crate::board::button::{ButtonGroup, Pull};
use crate::board::identity::{BleIdentity, Uf2Identity, UsbIdentity};
use crate::board::led::{LedGroup, Level};
use crate::board::pin::Pin;
use crate::board::BoardDescriptor;

pub const BOARD: BoardDescriptor<'static> = BoardDescriptor {
    name: "pca10056",
    leds: LedGroup::simple(Pin::new(0, 13), Level::Low).with_secondary(Pin::new(0, 14)),
    buttons: ButtonGroup::new(Pull::Up, &[Pin::new(0, 11), Pin::new(0, 12)]),
    ble: BleIdentity {
        manufacturer: "Nordic",
        model: "PCA10056",
    },
    usb: UsbIdentity {
        vid: 0x239A,
        uf2_pid: 0x0029,
        cdc_only_pid: 0x002A,
    },
    uf2: Uf2Identity {
        product_name: "Nordic nRF52840DK",
        volume_label: "NRF52BOOT",
        board_id: "nRF52840-pca10056-v1",
        index_url: "https://www.nordicsemi.com/Software-and-Tools/Development-Kits/nRF52840-DK",
    },
};
