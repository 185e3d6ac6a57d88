//! Button wiring. All buttons of a board share one pull configuration.

use super::pin::Pin;
use crate::config::MAX_BUTTONS;

/// Pull resistor applied to every button input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    Up,
    Down,
    None,
}

impl Pull {
    /// Build-config spelling (`NRF_GPIO_PIN_` prefix dropped).
    pub const fn name(self) -> &'static str {
        match self {
            Pull::Up => "PULLUP",
            Pull::Down => "PULLDOWN",
            Pull::None => "NOPULL",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.strip_prefix("NRF_GPIO_PIN_").unwrap_or(name) {
            "PULLUP" => Some(Pull::Up),
            "PULLDOWN" => Some(Pull::Down),
            "NOPULL" => Some(Pull::None),
            _ => None,
        }
    }
}

/// Buttons of a board, `BUTTON_1` first.
///
/// The count is the number of declared pins, so `BUTTONS_NUMBER` can never
/// disagree with the `BUTTON_<n>` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonGroup {
    pins: [Pin; MAX_BUTTONS],
    len: u8,
    pub pull: Pull,
}

impl ButtonGroup {
    /// Declare buttons from a pin list.
    ///
    /// # Panics
    ///
    /// If `pins` holds more than `MAX_BUTTONS` entries. In a `const` board
    /// table this is a compile error; runtime callers use
    /// [`ButtonGroup::try_new`].
    pub const fn new(pull: Pull, pins: &[Pin]) -> Self {
        if pins.len() > MAX_BUTTONS {
            panic!("more than MAX_BUTTONS buttons");
        }
        let mut out = [Pin::from_raw(0); MAX_BUTTONS];
        let len = pins.len();
        let mut i = 0;
        while i < len {
            out[i] = pins[i];
            i += 1;
        }
        Self {
            pins: out,
            len: len as u8,
            pull,
        }
    }

    pub const fn try_new(pull: Pull, pins: &[Pin]) -> Option<Self> {
        if pins.len() > MAX_BUTTONS {
            None
        } else {
            Some(Self::new(pull, pins))
        }
    }

    /// `BUTTONS_NUMBER`.
    pub const fn count(&self) -> usize {
        self.len as usize
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins[..self.len as usize]
    }

    /// `BUTTON_<n>`, 1-based.
    pub fn get(&self, n: usize) -> Option<Pin> {
        n.checked_sub(1).and_then(|i| self.pins().get(i).copied())
    }
}
