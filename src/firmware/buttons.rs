//! GPIO button input with async debouncing.
//!
//! Each declared button gets its own task. The pressed level follows the
//! board's shared pull configuration: pull-up boards are active-low,
//! pull-down boards active-high.

use crate::firmware::{claim, pull};
use defmt::{info, Format};
use embassy_nrf::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};
use uf2_boards::board::button::Pull;
use uf2_boards::board::pin::Pin;
use uf2_boards::config::{BUTTON_DEBOUNCE_MS, MAX_BUTTONS};

/// A debounced press of `BUTTON_<n>`.
#[derive(Clone, Copy, PartialEq, Eq, Format)]
pub struct ButtonEvent {
    pub button: u8,
}

pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, 4> = Channel::new();

/// Run a single button polling loop.
///
/// Waits for the press edge, debounces, sends the event, then waits for
/// release before repeating.
#[embassy_executor::task(pool_size = MAX_BUTTONS)]
pub async fn button_task(pin: Pin, pull_cfg: Pull, button: u8) -> ! {
    let mut btn = Input::new(unsafe { claim(pin) }, pull(pull_cfg));
    let active_low = pull_cfg != Pull::Down;
    let event = ButtonEvent { button };

    info!("BUTTON_{} on {}", button, pin);

    loop {
        if active_low {
            btn.wait_for_falling_edge().await;
        } else {
            btn.wait_for_rising_edge().await;
        }

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() == active_low {
            info!("Button: {}", event);
            BUTTON_EVENTS.send(event).await;

            // Wait for release to avoid repeat triggers.
            if active_low {
                btn.wait_for_rising_edge().await;
            } else {
                btn.wait_for_falling_edge().await;
            }
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        }
    }
}
