//! Status LED heartbeat.

use crate::firmware::{claim, level};
use defmt::info;
use embassy_nrf::gpio::{Output, OutputDrive};
use embassy_time::{Duration, Timer};
use uf2_boards::board::led::LedGroup;
use uf2_boards::config::HEARTBEAT_MS;

/// Blink the primary LED; the secondary LED, if any, blinks in antiphase.
#[embassy_executor::task]
pub async fn heartbeat_task(leds: LedGroup) -> ! {
    let on = level(leds.state_on);
    let off = level(leds.state_on.off());

    let mut primary = Output::new(unsafe { claim(leds.primary) }, off, OutputDrive::Standard);
    let mut secondary = leds
        .secondary
        .map(|pin| Output::new(unsafe { claim(pin) }, on, OutputDrive::Standard));

    info!("Heartbeat on {} LED(s), active {}", leds.count(), leds.state_on);

    loop {
        primary.toggle();
        if let Some(led) = secondary.as_mut() {
            led.toggle();
        }
        Timer::after(Duration::from_millis(HEARTBEAT_MS)).await;
    }
}
