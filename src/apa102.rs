//! APA102 ("DotStar") LED frames and a bit-banged chain driver.
//!
//! Wire format (SPI mode 0, MSB first):
//! ```text
//! start frame : 32 x 0 bits
//! LED frame   : 0b111b_bbbb  B  G  R     (b = 5-bit global brightness)
//! end frame   : ceil(n / 16) bytes of 0xFF
//! ```
//!
//! `LED_APA102_BRIGHTNESS` is the 5-bit global brightness of each LED
//! frame. `BOARD_RGB_BRIGHTNESS` is a mask over `0x00RRGGBB` applied
//! before encoding.

use embedded_hal::digital::{OutputPin, PinState};

use crate::board::led::Apa102 as Apa102Config;
use crate::config::APA102_MAX_BRIGHTNESS;

pub const START_FRAME: [u8; 4] = [0x00; 4];

/// Encode one LED frame.
pub fn frame(brightness: u8, rgb: u32, mask: u32) -> [u8; 4] {
    let [_, r, g, b] = (rgb & mask).to_be_bytes();
    [0xE0 | (brightness & APA102_MAX_BRIGHTNESS), b, g, r]
}

/// Number of `0xFF` bytes clocked out after the last LED frame.
pub fn end_frame_len(count: u8) -> usize {
    (count as usize).div_ceil(16).max(1)
}

/// APA102 chain on two GPIOs.
pub struct Apa102<C, D> {
    clock: C,
    data: D,
    brightness: u8,
    count: u8,
    mask: u32,
}

impl<C, D, E> Apa102<C, D>
where
    C: OutputPin<Error = E>,
    D: OutputPin<Error = E>,
{
    /// Take over the chain described by `config`; the clock idles low.
    pub fn new(mut clock: C, data: D, config: &Apa102Config, mask: u32) -> Result<Self, E> {
        clock.set_low()?;
        Ok(Self {
            clock,
            data,
            brightness: config.brightness,
            count: config.count,
            mask,
        })
    }

    /// Show the same colour on every LED.
    pub fn fill(&mut self, rgb: u32) -> Result<(), E> {
        self.write_bytes(&START_FRAME)?;
        let led = frame(self.brightness, rgb, self.mask);
        for _ in 0..self.count {
            self.write_bytes(&led)?;
        }
        self.end_frame()
    }

    /// Show one colour per LED; LEDs past `colors.len()` are turned off.
    pub fn write(&mut self, colors: &[u32]) -> Result<(), E> {
        self.write_bytes(&START_FRAME)?;
        for i in 0..self.count as usize {
            let rgb = colors.get(i).copied().unwrap_or(0);
            let led = frame(self.brightness, rgb, self.mask);
            self.write_bytes(&led)?;
        }
        self.end_frame()
    }

    pub fn off(&mut self) -> Result<(), E> {
        self.fill(0)
    }

    fn end_frame(&mut self) -> Result<(), E> {
        for _ in 0..end_frame_len(self.count) {
            self.write_byte(0xFF)?;
        }
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), E> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            self.data.set_state(PinState::from(byte & (1 << bit) != 0))?;
            self.clock.set_high()?;
            self.clock.set_low()?;
        }
        Ok(())
    }
}
