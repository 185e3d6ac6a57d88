//! Build-configuration validation of board descriptors.
//!
//! The descriptor itself accepts any value; this is where chip pin geometry,
//! string charsets and ID rules are enforced. The first violation wins.

use super::led::RgbLed;
use super::pin::Chip;
use super::{BoardDescriptor, Field};
use crate::config::{APA102_MAX_BRIGHTNESS, USB_STRING_MAX_LEN, VOLUME_LABEL_MAX_LEN};
use crate::error::{Error, Reason};

/// Characters besides `A-Z`, `0-9` and space allowed in a FAT volume label.
const FAT_LABEL_SPECIALS: &[u8] = b"!#$%&'()-@^_`{}~";

/// Check every schema constraint of `board`.
pub fn validate(board: &BoardDescriptor<'_>) -> Result<(), Error> {
    let result = check(board);
    if let Err(e) = &result {
        warn!("board {=str} rejected: {}", board.name, e);
    }
    result
}

fn check(board: &BoardDescriptor<'_>) -> Result<(), Error> {
    let chip = check_board_id(board.uf2.board_id)?;
    check_pins(board, chip)?;
    check_leds(board)?;
    check_buttons(board)?;

    text(Field::Board, board.name)?;
    text(Field::BledisModel, board.ble.model)?;
    usb_string(Field::BledisManufacturer, board.ble.manufacturer)?;
    usb_string(Field::Uf2ProductName, board.uf2.product_name)?;
    volume_label(board.uf2.volume_label)?;
    index_url(board.uf2.index_url)?;

    check_usb(board)
}

fn invalid(field: Field, reason: Reason) -> Error {
    Error::Invalid { field, reason }
}

/// Non-empty printable ASCII without quote or backslash.
pub fn text(field: Field, s: &str) -> Result<(), Error> {
    if s.is_empty() {
        return Err(invalid(field, Reason::Empty));
    }
    for b in s.bytes() {
        if !(0x20..=0x7E).contains(&b) {
            return Err(invalid(field, Reason::NotPrintable));
        }
        if b == b'"' || b == b'\\' {
            return Err(invalid(field, Reason::ForbiddenChar));
        }
    }
    Ok(())
}

fn usb_string(field: Field, s: &str) -> Result<(), Error> {
    text(field, s)?;
    if s.len() > USB_STRING_MAX_LEN {
        return Err(invalid(field, Reason::TooLong));
    }
    Ok(())
}

/// Legacy FAT volume label rules.
pub fn volume_label(label: &str) -> Result<(), Error> {
    let field = Field::Uf2VolumeLabel;
    text(field, label)?;
    if label.len() > VOLUME_LABEL_MAX_LEN {
        return Err(invalid(field, Reason::TooLong));
    }
    if label.starts_with(' ') {
        return Err(invalid(field, Reason::LeadingSpace));
    }
    for b in label.bytes() {
        if b.is_ascii_lowercase() {
            return Err(invalid(field, Reason::Lowercase));
        }
        let allowed = b.is_ascii_uppercase()
            || b.is_ascii_digit()
            || b == b' '
            || FAT_LABEL_SPECIALS.contains(&b);
        if !allowed {
            return Err(invalid(field, Reason::ForbiddenChar));
        }
    }
    Ok(())
}

/// `<chip>-<board>-<revision>`, returning the chip.
pub fn check_board_id(id: &str) -> Result<Chip, Error> {
    let field = Field::Uf2BoardId;
    text(field, id)?;
    if !id
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(invalid(field, Reason::ForbiddenChar));
    }

    let (chip, rest) = id
        .split_once('-')
        .ok_or(invalid(field, Reason::BadFormat))?;
    let (board, revision) = rest
        .rsplit_once('-')
        .ok_or(invalid(field, Reason::BadFormat))?;
    if chip.is_empty() || board.is_empty() || revision.is_empty() {
        return Err(invalid(field, Reason::BadFormat));
    }

    Chip::from_board_id(id).ok_or(invalid(field, Reason::UnknownChip))
}

fn index_url(url: &str) -> Result<(), Error> {
    let field = Field::Uf2IndexUrl;
    text(field, url)?;
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or(invalid(field, Reason::BadFormat))?;
    if rest.is_empty() {
        return Err(invalid(field, Reason::BadFormat));
    }
    if url.contains(' ') {
        return Err(invalid(field, Reason::ForbiddenChar));
    }
    Ok(())
}

fn check_pins(board: &BoardDescriptor<'_>, chip: Chip) -> Result<(), Error> {
    for (field, pin) in board.pins() {
        if !chip.has_pin(pin) {
            return Err(invalid(field, Reason::PinNotOnChip));
        }
    }

    for (i, (first, a)) in board.pins().enumerate() {
        if let Some((second, _)) = board.pins().skip(i + 1).find(|&(_, b)| b == a) {
            return Err(Error::PinConflict { first, second });
        }
    }
    Ok(())
}

fn check_leds(board: &BoardDescriptor<'_>) -> Result<(), Error> {
    match board.leds.rgb {
        Some(RgbLed::Apa102(a)) => {
            if a.brightness > APA102_MAX_BRIGHTNESS {
                return Err(invalid(
                    Field::LedApa102Brightness,
                    Reason::BrightnessOutOfRange,
                ));
            }
            if a.count == 0 {
                return Err(invalid(Field::Apa102Number, Reason::ZeroCount));
            }
        }
        Some(RgbLed::Neopixel(n)) => {
            if n.count == 0 {
                return Err(invalid(Field::NeopixelsNumber, Reason::ZeroCount));
            }
        }
        None => {}
    }
    Ok(())
}

fn check_buttons(board: &BoardDescriptor<'_>) -> Result<(), Error> {
    if board.buttons.count() == 0 {
        return Err(invalid(Field::ButtonsNumber, Reason::ZeroCount));
    }
    Ok(())
}

fn check_usb(board: &BoardDescriptor<'_>) -> Result<(), Error> {
    let usb = &board.usb;
    if usb.vid == 0 {
        return Err(invalid(Field::UsbDescVid, Reason::Zero));
    }
    if usb.uf2_pid == 0 {
        return Err(invalid(Field::UsbDescUf2Pid, Reason::Zero));
    }
    if usb.cdc_only_pid == 0 {
        return Err(invalid(Field::UsbDescCdcOnlyPid, Reason::Zero));
    }
    if usb.uf2_pid == usb.cdc_only_pid {
        return Err(invalid(Field::UsbDescCdcOnlyPid, Reason::PidCollision));
    }
    Ok(())
}
