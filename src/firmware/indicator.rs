//! Addressable RGB indicator - shows a colour per button press.

use crate::firmware::buttons::{ButtonEvent, BUTTON_EVENTS};
use crate::firmware::claim;
use defmt::{info, unwrap, warn};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_time::{Duration, Timer};
use uf2_boards::apa102::Apa102;
use uf2_boards::board::led::{LedGroup, RgbLed};
use uf2_boards::config::INDICATOR_HOLD_MS;

/// Colours cycled through by button number (`0x00RRGGBB`).
const PALETTE: [u32; 4] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0x00FF_FFFF];

fn colour(event: ButtonEvent) -> u32 {
    PALETTE[usize::from(event.button.saturating_sub(1)) % PALETTE.len()]
}

#[embassy_executor::task]
pub async fn indicator_task(leds: LedGroup) -> ! {
    let mut strip = match leds.rgb {
        Some(RgbLed::Apa102(cfg)) => {
            let clock = Output::new(unsafe { claim(cfg.clock) }, Level::Low, OutputDrive::Standard);
            let data = Output::new(unsafe { claim(cfg.data) }, Level::Low, OutputDrive::Standard);
            let mut strip = unwrap!(Apa102::new(clock, data, &cfg, leds.rgb_mask));
            unwrap!(strip.off());
            info!("APA102 chain of {} on {}/{}", cfg.count, cfg.clock, cfg.data);
            Some(strip)
        }
        Some(RgbLed::Neopixel(n)) => {
            warn!("NeoPixel on {} not driven by bring-up firmware", n.data);
            None
        }
        None => None,
    };

    let hold = Duration::from_millis(INDICATOR_HOLD_MS);
    loop {
        let mut event = BUTTON_EVENTS.receive().await;

        // Hold the colour until the next press or the timeout.
        loop {
            if let Some(strip) = strip.as_mut() {
                unwrap!(strip.fill(colour(event)));
            }
            match select(BUTTON_EVENTS.receive(), Timer::after(hold)).await {
                Either::First(next) => event = next,
                Either::Second(()) => break,
            }
        }

        if let Some(strip) = strip.as_mut() {
            unwrap!(strip.off());
        }
    }
}
