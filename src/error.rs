//! Unified error type for uf2-boards.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Every variant that concerns the descriptor names the offending
//! [`Field`], so a failed build points straight at the board table line.

use core::fmt;

/// Named fields of the board descriptor schema.
///
/// The `key()` of each variant is the name used in board headers and
/// build-config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Board,

    // LED
    LedsNumber,
    LedPrimaryPin,
    LedSecondaryPin,
    LedStateOn,
    LedApa102Clk,
    LedApa102Data,
    LedApa102Brightness,
    Apa102Number,
    LedNeopixel,
    NeopixelsNumber,
    BoardRgbBrightness,

    // Buttons
    ButtonsNumber,
    /// `BUTTON_<n>`, 1-based.
    Button(u8),
    ButtonPull,

    // BLE
    BledisManufacturer,
    BledisModel,

    // USB
    UsbDescVid,
    UsbDescUf2Pid,
    UsbDescCdcOnlyPid,

    // UF2
    Uf2ProductName,
    Uf2VolumeLabel,
    Uf2BoardId,
    Uf2IndexUrl,
}

impl Field {
    /// Every fixed-name field, in the order they are written to a
    /// build-config file. `Button(n)` is handled separately.
    pub const NAMED: [Field; 23] = [
        Field::Board,
        Field::LedsNumber,
        Field::LedPrimaryPin,
        Field::LedSecondaryPin,
        Field::LedStateOn,
        Field::LedApa102Clk,
        Field::LedApa102Data,
        Field::LedApa102Brightness,
        Field::Apa102Number,
        Field::LedNeopixel,
        Field::NeopixelsNumber,
        Field::BoardRgbBrightness,
        Field::ButtonsNumber,
        Field::ButtonPull,
        Field::BledisManufacturer,
        Field::BledisModel,
        Field::UsbDescVid,
        Field::UsbDescUf2Pid,
        Field::UsbDescCdcOnlyPid,
        Field::Uf2ProductName,
        Field::Uf2VolumeLabel,
        Field::Uf2BoardId,
        Field::Uf2IndexUrl,
    ];

    /// Header / build-config key. `Button(n)` has no static key; use
    /// `Display` for it instead.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Board => "BOARD",
            Field::LedsNumber => "LEDS_NUMBER",
            Field::LedPrimaryPin => "LED_PRIMARY_PIN",
            Field::LedSecondaryPin => "LED_SECONDARY_PIN",
            Field::LedStateOn => "LED_STATE_ON",
            Field::LedApa102Clk => "LED_APA102_CLK",
            Field::LedApa102Data => "LED_APA102_DATA",
            Field::LedApa102Brightness => "LED_APA102_BRIGHTNESS",
            Field::Apa102Number => "APA102_NUMBER",
            Field::LedNeopixel => "LED_NEOPIXEL",
            Field::NeopixelsNumber => "NEOPIXELS_NUMBER",
            Field::BoardRgbBrightness => "BOARD_RGB_BRIGHTNESS",
            Field::ButtonsNumber => "BUTTONS_NUMBER",
            Field::Button(_) => "BUTTON_<n>",
            Field::ButtonPull => "BUTTON_PULL",
            Field::BledisManufacturer => "BLEDIS_MANUFACTURER",
            Field::BledisModel => "BLEDIS_MODEL",
            Field::UsbDescVid => "USB_DESC_VID",
            Field::UsbDescUf2Pid => "USB_DESC_UF2_PID",
            Field::UsbDescCdcOnlyPid => "USB_DESC_CDC_ONLY_PID",
            Field::Uf2ProductName => "UF2_PRODUCT_NAME",
            Field::Uf2VolumeLabel => "UF2_VOLUME_LABEL",
            Field::Uf2BoardId => "UF2_BOARD_ID",
            Field::Uf2IndexUrl => "UF2_INDEX_URL",
        }
    }

    /// Look up a field by its key. `BUTTON_<n>` keys map to `Button(n)`.
    pub fn from_key(key: &str) -> Option<Field> {
        if let Some(n) = key.strip_prefix("BUTTON_") {
            if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) {
                return n.parse::<u8>().ok().filter(|&n| n > 0).map(Field::Button);
            }
        }
        Field::NAMED.iter().copied().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Button(n) => write!(f, "BUTTON_{}", n),
            other => f.write_str(other.key()),
        }
    }
}

/// Why a field value was rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reason {
    /// String is empty.
    Empty,
    /// String contains a non-printable or non-ASCII character.
    NotPrintable,
    /// String contains a character its destination does not allow.
    ForbiddenChar,
    /// String exceeds its destination's length limit.
    TooLong,
    /// FAT volume labels are upper-case only.
    Lowercase,
    /// FAT volume labels may not start with a space.
    LeadingSpace,
    /// Value does not follow the field's required format.
    BadFormat,
    /// Board ID names a chip we have no pin geometry for.
    UnknownChip,
    /// `_PINNUM(port, pin)` written with a pin index above 31.
    PinOutOfRange,
    /// Pin does not exist on the board's chip.
    PinNotOnChip,
    /// APA102 global brightness is a 5-bit value.
    BrightnessOutOfRange,
    /// A count that must be at least one is zero.
    ZeroCount,
    /// More entries than the schema supports.
    TooMany,
    /// Identifier must be non-zero.
    Zero,
    /// UF2 and CDC-only PIDs must differ.
    PidCollision,
}

impl Reason {
    fn describe(self) -> &'static str {
        match self {
            Reason::Empty => "must not be empty",
            Reason::NotPrintable => "contains a non-printable character",
            Reason::ForbiddenChar => "contains a forbidden character",
            Reason::TooLong => "is too long",
            Reason::Lowercase => "must not contain lowercase letters",
            Reason::LeadingSpace => "must not start with a space",
            Reason::BadFormat => "is malformed",
            Reason::UnknownChip => "names an unknown chip",
            Reason::PinOutOfRange => "pin index above 31",
            Reason::PinNotOnChip => "pin does not exist on this chip",
            Reason::BrightnessOutOfRange => "brightness must be 0..=31",
            Reason::ZeroCount => "count must be at least 1",
            Reason::TooMany => "too many entries",
            Reason::Zero => "must be non-zero",
            Reason::PidCollision => "must differ from USB_DESC_UF2_PID",
        }
    }
}

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Registry
    /// No board with the requested name is registered.
    UnknownBoard,

    // Build-config parsing
    /// Line is not `KEY = value`.
    Syntax { line: u32 },

    /// Key is not part of the schema.
    UnknownKey { line: u32 },

    /// Key appears more than once.
    Duplicate(Field),

    /// Required key is absent.
    Missing(Field),

    /// An optional block was only partly specified.
    Incomplete(Field),

    /// Value could not be parsed for its field.
    InvalidValue(Field),

    /// A declared count disagrees with the number of entries.
    CountMismatch {
        field: Field,
        declared: u32,
        found: u32,
    },

    // Validation
    /// Field value violates a schema constraint.
    Invalid { field: Field, reason: Reason },

    /// Two board functions are wired to the same physical pin.
    PinConflict { first: Field, second: Field },

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

impl Error {
    /// The schema field this error concerns, if any.
    pub fn field(&self) -> Option<Field> {
        match *self {
            Error::Duplicate(f)
            | Error::Missing(f)
            | Error::Incomplete(f)
            | Error::InvalidValue(f) => Some(f),
            Error::CountMismatch { field, .. } | Error::Invalid { field, .. } => Some(field),
            Error::PinConflict { second, .. } => Some(second),
            Error::UnknownBoard
            | Error::Syntax { .. }
            | Error::UnknownKey { .. }
            | Error::BufferOverflow => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownBoard => f.write_str("unknown board"),
            Error::Syntax { line } => write!(f, "line {}: expected `KEY = value`", line),
            Error::UnknownKey { line } => write!(f, "line {}: unknown key", line),
            Error::Duplicate(field) => write!(f, "{}: defined more than once", field),
            Error::Missing(field) => write!(f, "{}: required field is missing", field),
            Error::Incomplete(field) => write!(f, "{}: incomplete LED block", field),
            Error::InvalidValue(field) => write!(f, "{}: invalid value", field),
            Error::CountMismatch {
                field,
                declared,
                found,
            } => write!(f, "{}: declared {} but found {}", field, declared, found),
            Error::Invalid { field, reason } => write!(f, "{}: {}", field, reason.describe()),
            Error::PinConflict { first, second } => {
                write!(f, "{}: same pin as {}", second, first)
            }
            Error::BufferOverflow => f.write_str("buffer too small"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::BufferOverflow
    }
}
