//! Packed GPIO pin identifiers.
//!
//! nRF52 GPIOs are addressed as `port * 32 + pin`:
//! ```text
//! P0.06  ->  0 * 32 + 6  =  6
//! P1.09  ->  1 * 32 + 9  = 41
//! ```

use core::fmt;

/// Number of pins addressable per GPIO port.
pub const PINS_PER_PORT: u32 = 32;

/// Pack `(port, pin)` into a single pin number.
///
/// A `pin` above 31 silently spills into the next port. Range checks
/// belong to [`crate::board::validate`]; untrusted input goes through
/// [`Pin::checked_new`].
pub const fn pin_num(port: u32, pin: u32) -> u32 {
    port * PINS_PER_PORT + pin
}

/// A packed pin number (`_PINNUM(port, pin)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u32);

impl Pin {
    pub const fn new(port: u32, pin: u32) -> Self {
        Self(pin_num(port, pin))
    }

    /// `_PINNUM(port, pin)` with `pin < 32` and no overflow of the packed
    /// number.
    pub const fn checked_new(port: u32, pin: u32) -> Option<Self> {
        if pin >= PINS_PER_PORT {
            return None;
        }
        match port.checked_mul(PINS_PER_PORT) {
            Some(base) => match base.checked_add(pin) {
                Some(raw) => Some(Self(raw)),
                None => None,
            },
            None => None,
        }
    }

    /// Wrap an already-packed pin number.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn port(self) -> u32 {
        self.0 / PINS_PER_PORT
    }

    /// Pin index within its port.
    pub const fn index(self) -> u32 {
        self.0 % PINS_PER_PORT
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}.{:02}", self.port(), self.index())
    }
}

/// Supported nRF52 chips and their GPIO geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chip {
    Nrf52832,
    Nrf52833,
    Nrf52840,
}

impl Chip {
    pub const ALL: [Chip; 3] = [Chip::Nrf52832, Chip::Nrf52833, Chip::Nrf52840];

    /// Name as it appears at the start of a UF2 board ID.
    pub const fn name(self) -> &'static str {
        match self {
            Chip::Nrf52832 => "nRF52832",
            Chip::Nrf52833 => "nRF52833",
            Chip::Nrf52840 => "nRF52840",
        }
    }

    /// Number of pins bonded out on each port, indexed by port.
    pub const fn port_widths(self) -> &'static [u32] {
        match self {
            Chip::Nrf52832 => &[32],
            Chip::Nrf52833 => &[32, 10],
            Chip::Nrf52840 => &[32, 16],
        }
    }

    pub fn has_pin(self, pin: Pin) -> bool {
        self.port_widths()
            .get(pin.port() as usize)
            .is_some_and(|&width| pin.index() < width)
    }

    /// Resolve the chip from a `<chip>-<board>-<revision>` board ID.
    pub fn from_board_id(board_id: &str) -> Option<Chip> {
        let (chip, _) = board_id.split_once('-')?;
        Chip::ALL.iter().copied().find(|c| c.name() == chip)
    }
}
