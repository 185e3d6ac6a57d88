//! Board bring-up firmware for nRF52840 UF2 boards.
//!
//! Everything the firmware touches comes from the board descriptor selected
//! at build time (`BOARD=<name> cargo run --release --features embedded`):
//! status LEDs, buttons, the APA102 indicator and the USB identity.

#![no_std]
#![no_main]

mod firmware;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use uf2_boards::boards;
use uf2_boards::config::BOOTLOADER_VERSION;
use {defmt_rtt as _, panic_probe as _};

use firmware::buttons::button_task;
use firmware::indicator::indicator_task;
use firmware::status::heartbeat_task;
use firmware::usb::{self, info_task, run_usb_device};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    let board = match boards::selected() {
        Ok(board) => board,
        Err(e) => defmt::panic!("board {=str}: {}", boards::SELECTED_BOARD, e),
    };

    info!("UF2 board bring-up v{=str}", BOOTLOADER_VERSION);
    info!("Board: {=str} ({=str})", board.name, board.uf2.board_id);
    info!(
        "LEDs: {}, buttons: {}, pull {=str}",
        board.leds.count(),
        board.buttons.count(),
        board.buttons.pull.name()
    );

    unwrap!(spawner.spawn(heartbeat_task(board.leds)));

    for (i, &pin) in board.buttons.pins().iter().enumerate() {
        unwrap!(spawner.spawn(button_task(pin, board.buttons.pull, i as u8 + 1)));
    }

    unwrap!(spawner.spawn(indicator_task(board.leds)));

    let serial = usb::init(p.USBD, board);
    unwrap!(spawner.spawn(run_usb_device(serial.device)));
    unwrap!(spawner.spawn(info_task(serial.class, board)));

    info!("All tasks spawned");
}
