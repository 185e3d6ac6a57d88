//! LED wiring: simple status LEDs plus an optional addressable RGB LED.

use super::pin::Pin;
use crate::config::DEFAULT_RGB_BRIGHTNESS;

/// GPIO output level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// `LED_STATE_ON` encoding: 0 = active-low, 1 = active-high.
    pub const fn from_bit(bit: u32) -> Option<Self> {
        match bit {
            0 => Some(Level::Low),
            1 => Some(Level::High),
            _ => None,
        }
    }

    pub const fn bit(self) -> u32 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }

    /// The opposite level, i.e. the "off" level for an LED whose
    /// on-level is `self`.
    pub const fn off(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// APA102 ("DotStar") addressable LED chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Apa102 {
    pub clock: Pin,
    pub data: Pin,
    /// 5-bit global brightness written into each LED frame header.
    pub brightness: u8,
    /// Number of LEDs on the chain.
    pub count: u8,
}

/// WS2812 ("NeoPixel") addressable LED chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Neopixel {
    pub data: Pin,
    pub count: u8,
}

/// Addressable RGB LED, if the board has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbLed {
    Apa102(Apa102),
    Neopixel(Neopixel),
}

impl RgbLed {
    pub const fn count(&self) -> u8 {
        match self {
            RgbLed::Apa102(a) => a.count,
            RgbLed::Neopixel(n) => n.count,
        }
    }
}

/// LED group of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedGroup {
    pub primary: Pin,
    pub secondary: Option<Pin>,
    /// Level that turns the simple LEDs on (`LED_STATE_ON`).
    pub state_on: Level,
    pub rgb: Option<RgbLed>,
    /// Mask applied to `0x00RRGGBB` colours before they reach the RGB LED
    /// (`BOARD_RGB_BRIGHTNESS`).
    pub rgb_mask: u32,
}

impl LedGroup {
    /// Board with a single active-high/low status LED and nothing else.
    pub const fn simple(primary: Pin, state_on: Level) -> Self {
        Self {
            primary,
            secondary: None,
            state_on,
            rgb: None,
            rgb_mask: DEFAULT_RGB_BRIGHTNESS,
        }
    }

    pub const fn with_secondary(mut self, pin: Pin) -> Self {
        self.secondary = Some(pin);
        self
    }

    pub const fn with_rgb(mut self, rgb: RgbLed, mask: u32) -> Self {
        self.rgb = Some(rgb);
        self.rgb_mask = mask;
        self
    }

    /// Number of simple LEDs (`LEDS_NUMBER`).
    pub const fn count(&self) -> u32 {
        if self.secondary.is_some() {
            2
        } else {
            1
        }
    }

    pub fn apa102(&self) -> Option<&Apa102> {
        match &self.rgb {
            Some(RgbLed::Apa102(a)) => Some(a),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bits() {
        assert_eq!(Level::from_bit(0), Some(Level::Low));
        assert_eq!(Level::from_bit(1), Some(Level::High));
        assert_eq!(Level::from_bit(2), None);
        assert_eq!(Level::High.bit(), 1);
        assert_eq!(Level::High.off(), Level::Low);
        assert_eq!(Level::Low.off(), Level::High);
    }

    #[test]
    fn led_count_follows_declared_pins() {
        let one = LedGroup::simple(Pin::new(0, 6), Level::High);
        assert_eq!(one.count(), 1);
        assert_eq!(one.rgb_mask, DEFAULT_RGB_BRIGHTNESS);

        let two = one.with_secondary(Pin::new(1, 10));
        assert_eq!(two.count(), 2);
    }

    #[test]
    fn rgb_variant_accessors() {
        let dotstar = Apa102 {
            clock: Pin::new(1, 9),
            data: Pin::new(0, 8),
            brightness: 1,
            count: 1,
        };
        let leds = LedGroup::simple(Pin::new(0, 6), Level::High)
            .with_rgb(RgbLed::Apa102(dotstar), 0xFFFF_FFFF);
        assert_eq!(leds.apa102(), Some(&dotstar));
        assert_eq!(leds.rgb.map(|r| r.count()), Some(1));

        let neo = LedGroup::simple(Pin::new(1, 15), Level::High).with_rgb(
            RgbLed::Neopixel(Neopixel {
                data: Pin::new(0, 16),
                count: 1,
            }),
            DEFAULT_RGB_BRIGHTNESS,
        );
        assert!(neo.apa102().is_none());
    }
}
