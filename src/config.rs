//! Schema limits and compile-time configuration.
//!
//! Limits enforced by the validator and timing parameters used by the
//! bring-up firmware live here so they can be tuned in one place.

// Board selection

/// Board used when the `BOARD` environment variable is not set at build time.
pub const DEFAULT_BOARD: &str = "itsybitsy_nrf52840_express";

// Schema limits

/// Maximum number of `BUTTON_<n>` entries a board may declare.
pub const MAX_BUTTONS: usize = 4;

/// Legacy FAT volume labels are at most 11 characters.
pub const VOLUME_LABEL_MAX_LEN: usize = 11;

/// USB string descriptors hold at most 126 UTF-16 code units
/// ((255 - 2) / 2).
pub const USB_STRING_MAX_LEN: usize = 126;

/// APA102 global brightness is a 5-bit field in the LED frame header.
pub const APA102_MAX_BRIGHTNESS: u8 = 31;

/// Colour mask applied when a board does not set `BOARD_RGB_BRIGHTNESS`.
pub const DEFAULT_RGB_BRIGHTNESS: u32 = 0x0040_4040;

// Firmware

/// Bootloader version string reported in `INFO_UF2.TXT`.
pub const BOOTLOADER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Status LED heartbeat half-period (ms).
pub const HEARTBEAT_MS: u64 = 500;

/// How long the RGB indicator holds a button colour before going dark (ms).
pub const INDICATOR_HOLD_MS: u64 = 1000;

/// USB bus power requested by the bring-up firmware (mA).
pub const USB_MAX_POWER_MA: u16 = 100;

/// USB CDC-ACM packet size.
pub const USB_CDC_PACKET_SIZE: u16 = 64;
