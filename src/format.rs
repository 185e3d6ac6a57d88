//! Build-config file format for board descriptors.
//!
//! One `KEY = value` per line, keys named as in the board headers:
//! ```text
//! BOARD = "itsybitsy_nrf52840_express"
//! LEDS_NUMBER = 1
//! LED_PRIMARY_PIN = _PINNUM(0, 6)
//! LED_STATE_ON = 1
//! BUTTON_PULL = PULLUP
//! USB_DESC_VID = 0x239A
//! UF2_VOLUME_LABEL = "ITSY840BOOT"
//! ```
//! Integers are decimal or `0x` hex, pins `_PINNUM(port, pin)` or a raw
//! pin number, strings double-quoted without escapes. `#` and `//` start
//! a comment outside of strings.
//!
//! [`parse`] borrows every string from the input and does not validate;
//! run [`crate::board::validate::validate`] on the result.

use core::fmt::{self, Write};

use crate::board::button::{ButtonGroup, Pull};
use crate::board::identity::{BleIdentity, Uf2Identity, UsbIdentity};
use crate::board::led::{Apa102, LedGroup, Level, Neopixel, RgbLed};
use crate::board::pin::{Pin, PINS_PER_PORT};
use crate::board::{BoardDescriptor, Field};
use crate::config::{DEFAULT_RGB_BRIGHTNESS, MAX_BUTTONS};
use crate::error::{Error, Reason};

/// Write `board` as a build-config file.
pub fn render<W: Write>(board: &BoardDescriptor<'_>, out: &mut W) -> fmt::Result {
    let leds = &board.leds;

    writeln!(out, "{} = \"{}\"", Field::Board, board.name)?;

    writeln!(out, "\n# LED")?;
    writeln!(out, "{} = {}", Field::LedsNumber, leds.count())?;
    pin_line(out, Field::LedPrimaryPin, leds.primary)?;
    if let Some(pin) = leds.secondary {
        pin_line(out, Field::LedSecondaryPin, pin)?;
    }
    writeln!(out, "{} = {}", Field::LedStateOn, leds.state_on.bit())?;
    match &leds.rgb {
        Some(RgbLed::Apa102(a)) => {
            pin_line(out, Field::LedApa102Clk, a.clock)?;
            pin_line(out, Field::LedApa102Data, a.data)?;
            writeln!(out, "{} = {}", Field::LedApa102Brightness, a.brightness)?;
            writeln!(out, "{} = {}", Field::Apa102Number, a.count)?;
        }
        Some(RgbLed::Neopixel(n)) => {
            pin_line(out, Field::LedNeopixel, n.data)?;
            writeln!(out, "{} = {}", Field::NeopixelsNumber, n.count)?;
        }
        None => {}
    }
    writeln!(out, "{} = 0x{:08X}", Field::BoardRgbBrightness, leds.rgb_mask)?;

    writeln!(out, "\n# BUTTON")?;
    writeln!(out, "{} = {}", Field::ButtonsNumber, board.buttons.count())?;
    for (i, &pin) in board.buttons.pins().iter().enumerate() {
        pin_line(out, Field::Button(i as u8 + 1), pin)?;
    }
    writeln!(out, "{} = {}", Field::ButtonPull, board.buttons.pull.name())?;

    writeln!(out, "\n# BLE")?;
    str_line(out, Field::BledisManufacturer, board.ble.manufacturer)?;
    str_line(out, Field::BledisModel, board.ble.model)?;

    writeln!(out, "\n# USB")?;
    writeln!(out, "{} = 0x{:04X}", Field::UsbDescVid, board.usb.vid)?;
    writeln!(out, "{} = 0x{:04X}", Field::UsbDescUf2Pid, board.usb.uf2_pid)?;
    writeln!(
        out,
        "{} = 0x{:04X}",
        Field::UsbDescCdcOnlyPid,
        board.usb.cdc_only_pid
    )?;

    writeln!(out, "\n# UF2")?;
    str_line(out, Field::Uf2ProductName, board.uf2.product_name)?;
    str_line(out, Field::Uf2VolumeLabel, board.uf2.volume_label)?;
    str_line(out, Field::Uf2BoardId, board.uf2.board_id)?;
    str_line(out, Field::Uf2IndexUrl, board.uf2.index_url)
}

fn pin_line<W: Write>(out: &mut W, field: Field, pin: Pin) -> fmt::Result {
    writeln!(out, "{} = _PINNUM({}, {})", field, pin.port(), pin.index())
}

fn str_line<W: Write>(out: &mut W, field: Field, value: &str) -> fmt::Result {
    writeln!(out, "{} = \"{}\"", field, value)
}

/// Render into a fixed-capacity string.
pub fn render_to_string<const N: usize>(
    board: &BoardDescriptor<'_>,
) -> Result<heapless::String<N>, Error> {
    let mut out = heapless::String::new();
    render(board, &mut out)?;
    Ok(out)
}

impl fmt::Display for BoardDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// Values collected from the file before the descriptor is assembled.
#[derive(Default)]
struct Entries<'a> {
    board: Option<&'a str>,
    leds_number: Option<u32>,
    led_primary: Option<Pin>,
    led_secondary: Option<Pin>,
    led_state_on: Option<Level>,
    apa102_clk: Option<Pin>,
    apa102_data: Option<Pin>,
    apa102_brightness: Option<u8>,
    apa102_number: Option<u8>,
    neopixel: Option<Pin>,
    neopixels_number: Option<u8>,
    rgb_brightness: Option<u32>,
    buttons_number: Option<u32>,
    buttons: [Option<Pin>; MAX_BUTTONS],
    button_pull: Option<Pull>,
    manufacturer: Option<&'a str>,
    model: Option<&'a str>,
    vid: Option<u16>,
    uf2_pid: Option<u16>,
    cdc_only_pid: Option<u16>,
    product_name: Option<&'a str>,
    volume_label: Option<&'a str>,
    board_id: Option<&'a str>,
    index_url: Option<&'a str>,
}

/// Parse a build-config file.
pub fn parse(text: &str) -> Result<BoardDescriptor<'_>, Error> {
    let mut entries = Entries::default();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i as u32 + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or(Error::Syntax { line: line_no })?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return Err(Error::Syntax { line: line_no });
        }
        let field = Field::from_key(key).ok_or(Error::UnknownKey { line: line_no })?;
        entries.set(field, value)?;
    }

    entries.assemble()
}

/// Cut a trailing `#` or `//` comment, ignoring markers inside quotes.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'"' => in_string = !in_string,
            b'#' if !in_string => return &line[..i],
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return &line[..i],
            _ => {}
        }
    }
    line
}

fn store<T>(slot: &mut Option<T>, field: Field, value: T) -> Result<(), Error> {
    if slot.is_some() {
        return Err(Error::Duplicate(field));
    }
    *slot = Some(value);
    Ok(())
}

fn require<T>(slot: Option<T>, field: Field) -> Result<T, Error> {
    slot.ok_or(Error::Missing(field))
}

fn complete<T>(slot: Option<T>, field: Field) -> Result<T, Error> {
    slot.ok_or(Error::Incomplete(field))
}

fn parse_u32(field: Field, value: &str) -> Result<u32, Error> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    parsed.map_err(|_| Error::InvalidValue(field))
}

fn parse_u16(field: Field, value: &str) -> Result<u16, Error> {
    u16::try_from(parse_u32(field, value)?).map_err(|_| Error::InvalidValue(field))
}

fn parse_u8(field: Field, value: &str) -> Result<u8, Error> {
    u8::try_from(parse_u32(field, value)?).map_err(|_| Error::InvalidValue(field))
}

fn parse_pin(field: Field, value: &str) -> Result<Pin, Error> {
    let Some(args) = value
        .strip_prefix("_PINNUM(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return parse_u32(field, value).map(Pin::from_raw);
    };
    let (port, pin) = args.split_once(',').ok_or(Error::InvalidValue(field))?;
    let port = parse_u32(field, port.trim())?;
    let pin = parse_u32(field, pin.trim())?;
    if pin >= PINS_PER_PORT {
        return Err(Error::Invalid {
            field,
            reason: Reason::PinOutOfRange,
        });
    }
    Pin::checked_new(port, pin).ok_or(Error::InvalidValue(field))
}

fn parse_str(field: Field, value: &str) -> Result<&str, Error> {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|inner| !inner.contains('"'))
        .ok_or(Error::InvalidValue(field))
}

impl<'a> Entries<'a> {
    fn set(&mut self, field: Field, value: &'a str) -> Result<(), Error> {
        match field {
            Field::Board => store(&mut self.board, field, parse_str(field, value)?),
            Field::LedsNumber => store(&mut self.leds_number, field, parse_u32(field, value)?),
            Field::LedPrimaryPin => store(&mut self.led_primary, field, parse_pin(field, value)?),
            Field::LedSecondaryPin => {
                store(&mut self.led_secondary, field, parse_pin(field, value)?)
            }
            Field::LedStateOn => {
                let level =
                    Level::from_bit(parse_u32(field, value)?).ok_or(Error::InvalidValue(field))?;
                store(&mut self.led_state_on, field, level)
            }
            Field::LedApa102Clk => store(&mut self.apa102_clk, field, parse_pin(field, value)?),
            Field::LedApa102Data => store(&mut self.apa102_data, field, parse_pin(field, value)?),
            Field::LedApa102Brightness => {
                store(&mut self.apa102_brightness, field, parse_u8(field, value)?)
            }
            Field::Apa102Number => store(&mut self.apa102_number, field, parse_u8(field, value)?),
            Field::LedNeopixel => store(&mut self.neopixel, field, parse_pin(field, value)?),
            Field::NeopixelsNumber => {
                store(&mut self.neopixels_number, field, parse_u8(field, value)?)
            }
            Field::BoardRgbBrightness => {
                store(&mut self.rgb_brightness, field, parse_u32(field, value)?)
            }
            Field::ButtonsNumber => {
                store(&mut self.buttons_number, field, parse_u32(field, value)?)
            }
            Field::Button(n) => {
                let slot = self
                    .buttons
                    .get_mut(n as usize - 1)
                    .ok_or(Error::Invalid {
                        field,
                        reason: Reason::TooMany,
                    })?;
                store(slot, field, parse_pin(field, value)?)
            }
            Field::ButtonPull => {
                let pull = Pull::from_name(value).ok_or(Error::InvalidValue(field))?;
                store(&mut self.button_pull, field, pull)
            }
            Field::BledisManufacturer => {
                store(&mut self.manufacturer, field, parse_str(field, value)?)
            }
            Field::BledisModel => store(&mut self.model, field, parse_str(field, value)?),
            Field::UsbDescVid => store(&mut self.vid, field, parse_u16(field, value)?),
            Field::UsbDescUf2Pid => store(&mut self.uf2_pid, field, parse_u16(field, value)?),
            Field::UsbDescCdcOnlyPid => {
                store(&mut self.cdc_only_pid, field, parse_u16(field, value)?)
            }
            Field::Uf2ProductName => store(&mut self.product_name, field, parse_str(field, value)?),
            Field::Uf2VolumeLabel => store(&mut self.volume_label, field, parse_str(field, value)?),
            Field::Uf2BoardId => store(&mut self.board_id, field, parse_str(field, value)?),
            Field::Uf2IndexUrl => store(&mut self.index_url, field, parse_str(field, value)?),
        }
    }

    fn assemble(self) -> Result<BoardDescriptor<'a>, Error> {
        let leds = self.leds()?;
        let buttons = self.buttons()?;

        Ok(BoardDescriptor {
            name: require(self.board, Field::Board)?,
            leds,
            buttons,
            ble: BleIdentity {
                manufacturer: require(self.manufacturer, Field::BledisManufacturer)?,
                model: require(self.model, Field::BledisModel)?,
            },
            usb: UsbIdentity {
                vid: require(self.vid, Field::UsbDescVid)?,
                uf2_pid: require(self.uf2_pid, Field::UsbDescUf2Pid)?,
                cdc_only_pid: require(self.cdc_only_pid, Field::UsbDescCdcOnlyPid)?,
            },
            uf2: Uf2Identity {
                product_name: require(self.product_name, Field::Uf2ProductName)?,
                volume_label: require(self.volume_label, Field::Uf2VolumeLabel)?,
                board_id: require(self.board_id, Field::Uf2BoardId)?,
                index_url: require(self.index_url, Field::Uf2IndexUrl)?,
            },
        })
    }

    fn leds(&self) -> Result<LedGroup, Error> {
        let declared = require(self.leds_number, Field::LedsNumber)?;
        let primary = require(self.led_primary, Field::LedPrimaryPin)?;
        let state_on = require(self.led_state_on, Field::LedStateOn)?;

        let mut leds = LedGroup::simple(primary, state_on);
        if let Some(pin) = self.led_secondary {
            leds = leds.with_secondary(pin);
        }
        if declared != leds.count() {
            return Err(Error::CountMismatch {
                field: Field::LedsNumber,
                declared,
                found: leds.count(),
            });
        }

        leds.rgb_mask = self.rgb_brightness.unwrap_or(DEFAULT_RGB_BRIGHTNESS);
        leds.rgb = self.rgb()?;
        Ok(leds)
    }

    fn rgb(&self) -> Result<Option<RgbLed>, Error> {
        let apa102 = [
            self.apa102_clk.is_some(),
            self.apa102_data.is_some(),
            self.apa102_brightness.is_some(),
            self.apa102_number.is_some(),
        ];
        let neopixel = [self.neopixel.is_some(), self.neopixels_number.is_some()];

        let has_apa102 = apa102.contains(&true);
        let has_neopixel = neopixel.contains(&true);
        if has_apa102 && has_neopixel {
            return Err(Error::InvalidValue(Field::LedNeopixel));
        }

        if has_apa102 {
            return Ok(Some(RgbLed::Apa102(Apa102 {
                clock: complete(self.apa102_clk, Field::LedApa102Clk)?,
                data: complete(self.apa102_data, Field::LedApa102Data)?,
                brightness: complete(self.apa102_brightness, Field::LedApa102Brightness)?,
                count: complete(self.apa102_number, Field::Apa102Number)?,
            })));
        }
        if has_neopixel {
            return Ok(Some(RgbLed::Neopixel(Neopixel {
                data: complete(self.neopixel, Field::LedNeopixel)?,
                count: complete(self.neopixels_number, Field::NeopixelsNumber)?,
            })));
        }
        Ok(None)
    }

    fn buttons(&self) -> Result<ButtonGroup, Error> {
        let declared = require(self.buttons_number, Field::ButtonsNumber)?;
        let pull = require(self.button_pull, Field::ButtonPull)?;

        let found = self.buttons.iter().filter(|b| b.is_some()).count();
        let mut pins = [Pin::from_raw(0); MAX_BUTTONS];
        for (i, pin) in pins.iter_mut().enumerate().take(found) {
            *pin = require(self.buttons[i], Field::Button(i as u8 + 1))?;
        }

        if declared as usize != found {
            return Err(Error::CountMismatch {
                field: Field::ButtonsNumber,
                declared,
                found: found as u32,
            });
        }
        Ok(ButtonGroup::new(pull, &pins[..found]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards;
    use std::string::String;

    const ITSYBITSY: &str = r#"
BOARD = "itsybitsy_nrf52840_express"

# LED
LEDS_NUMBER           = 1
LED_PRIMARY_PIN       = _PINNUM(0, 6)
LED_STATE_ON          = 1
LED_APA102_CLK        = _PINNUM(1, 9)
LED_APA102_DATA       = _PINNUM(0, 8)
LED_APA102_BRIGHTNESS = 0x1
APA102_NUMBER         = 1
BOARD_RGB_BRIGHTNESS  = 0xffffffff  // full mask for the DotStar

# BUTTON
BUTTONS_NUMBER = 2
BUTTON_1       = _PINNUM(0, 29)  // user switch
BUTTON_2       = _PINNUM(1, 02)  // D2 breakout
BUTTON_PULL    = NRF_GPIO_PIN_PULLUP

BLEDIS_MANUFACTURER = "Adafruit Industries"
BLEDIS_MODEL        = "ItsyBitsy nRF52840 Express"

USB_DESC_VID          = 0x239A
USB_DESC_UF2_PID      = 0x0051
USB_DESC_CDC_ONLY_PID = 0x0052

UF2_PRODUCT_NAME = "Adafruit ItsyBitsy nRF52840 Express"
UF2_VOLUME_LABEL = "ITSY840BOOT"
UF2_BOARD_ID     = "nRF52840-ItsyBitsy-revA"
UF2_INDEX_URL    = "https://www.adafruit.com/"
"#;

    fn replace_line(text: &str, key: &str, line: Option<&str>) -> String {
        let mut out = String::new();
        for l in text.lines() {
            if l.split('=').next().map(str::trim) == Some(key) {
                if let Some(new) = line {
                    out.push_str(new);
                    out.push('\n');
                }
            } else {
                out.push_str(l);
                out.push('\n');
            }
        }
        out
    }

    #[test]
    fn parses_header_style_file() {
        let board = parse(ITSYBITSY).unwrap();
        assert_eq!(&board, &boards::itsybitsy_nrf52840_express::BOARD);
    }

    #[test]
    fn render_then_parse_is_identity_for_every_board() {
        for board in boards::ALL {
            let text = std::format!("{}", board);
            let parsed = parse(&text).unwrap();
            assert_eq!(&parsed, *board, "{}", board.name);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let board = &boards::feather_nrf52840_express::BOARD;
        let first = std::format!("{}", board);
        let second = std::format!("{}", parse(&first).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn render_into_fixed_buffer() {
        let board = &boards::itsybitsy_nrf52840_express::BOARD;
        let text = render_to_string::<2048>(board).unwrap();
        assert!(text.contains("LED_PRIMARY_PIN = _PINNUM(0, 6)\n"));
        assert!(text.contains("USB_DESC_UF2_PID = 0x0051\n"));
        assert!(text.contains("BOARD_RGB_BRIGHTNESS = 0xFFFFFFFF\n"));

        assert_eq!(
            render_to_string::<64>(board).unwrap_err(),
            Error::BufferOverflow
        );
    }

    #[test]
    fn comment_markers_inside_strings_are_kept() {
        assert_eq!(
            strip_comment(r#"URL = "https://x.org/#top" // trailing"#),
            r#"URL = "https://x.org/#top" "#
        );
        assert_eq!(strip_comment("# only a comment"), "");
    }

    #[test]
    fn raw_pin_numbers_accepted() {
        let text = replace_line(ITSYBITSY, "LED_APA102_CLK", Some("LED_APA102_CLK = 41"));
        let board = parse(&text).unwrap();
        assert_eq!(board.leds.apa102().unwrap().clock, Pin::new(1, 9));
    }

    #[test]
    fn pinnum_with_pin_above_31_rejected() {
        let text = replace_line(
            ITSYBITSY,
            "LED_PRIMARY_PIN",
            Some("LED_PRIMARY_PIN = _PINNUM(0, 32)"),
        );
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::Invalid {
                field: Field::LedPrimaryPin,
                reason: Reason::PinOutOfRange
            }
        );
    }

    #[test]
    fn pinnum_with_huge_port_rejected() {
        assert_eq!(
            parse("LED_PRIMARY_PIN = _PINNUM(200000000, 6)\n").unwrap_err(),
            Error::InvalidValue(Field::LedPrimaryPin)
        );
        let text = replace_line(
            ITSYBITSY,
            "BUTTON_1",
            Some("BUTTON_1 = _PINNUM(0xFFFFFFFF, 0)"),
        );
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::InvalidValue(Field::Button(1))
        );
    }

    #[test]
    fn missing_required_field() {
        let text = replace_line(ITSYBITSY, "UF2_VOLUME_LABEL", None);
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::Missing(Field::Uf2VolumeLabel)
        );
    }

    #[test]
    fn duplicate_field() {
        let text = std::format!("{}USB_DESC_VID = 0x1209\n", ITSYBITSY);
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::Duplicate(Field::UsbDescVid)
        );
    }

    #[test]
    fn unknown_key_reports_line() {
        let text = "BOARD = \"x\"\nLED_TERTIARY_PIN = 3\n";
        assert_eq!(parse(text).unwrap_err(), Error::UnknownKey { line: 2 });
    }

    #[test]
    fn button_key_beyond_u8_is_unknown() {
        let text = std::format!("{}BUTTON_300 = 3\n", ITSYBITSY);
        let line = ITSYBITSY.lines().count() as u32 + 1;
        assert_eq!(parse(&text).unwrap_err(), Error::UnknownKey { line });
    }

    #[test]
    fn syntax_errors_report_line() {
        assert_eq!(
            parse("\n\nLEDS_NUMBER 1\n").unwrap_err(),
            Error::Syntax { line: 3 }
        );
        assert_eq!(parse("LEDS_NUMBER =\n").unwrap_err(), Error::Syntax { line: 1 });
    }

    #[test]
    fn button_count_must_match_entries() {
        let text = replace_line(ITSYBITSY, "BUTTONS_NUMBER", Some("BUTTONS_NUMBER = 3"));
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::CountMismatch {
                field: Field::ButtonsNumber,
                declared: 3,
                found: 2
            }
        );
    }

    #[test]
    fn button_entries_must_be_contiguous() {
        let text = replace_line(ITSYBITSY, "BUTTON_2", Some("BUTTON_3 = _PINNUM(1, 2)"));
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::Missing(Field::Button(2))
        );
    }

    #[test]
    fn button_index_beyond_capacity() {
        let text = std::format!("{}BUTTON_9 = 3\n", ITSYBITSY);
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::Invalid {
                field: Field::Button(9),
                reason: Reason::TooMany
            }
        );
    }

    #[test]
    fn led_count_must_match_declared_leds() {
        let text = replace_line(ITSYBITSY, "LEDS_NUMBER", Some("LEDS_NUMBER = 2"));
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::CountMismatch {
                field: Field::LedsNumber,
                declared: 2,
                found: 1
            }
        );
    }

    #[test]
    fn partial_apa102_block_is_incomplete() {
        let text = replace_line(ITSYBITSY, "LED_APA102_DATA", None);
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::Incomplete(Field::LedApa102Data)
        );
    }

    #[test]
    fn apa102_and_neopixel_are_exclusive() {
        let text = std::format!("{}LED_NEOPIXEL = _PINNUM(0, 16)\nNEOPIXELS_NUMBER = 1\n", ITSYBITSY);
        assert_eq!(
            parse(&text).unwrap_err(),
            Error::InvalidValue(Field::LedNeopixel)
        );
    }

    #[test]
    fn rgb_mask_defaults_when_absent() {
        let text = replace_line(ITSYBITSY, "BOARD_RGB_BRIGHTNESS", None);
        let board = parse(&text).unwrap();
        assert_eq!(board.leds.rgb_mask, DEFAULT_RGB_BRIGHTNESS);
    }

    #[test]
    fn invalid_values() {
        let cases = [
            ("LED_STATE_ON", "LED_STATE_ON = 2", Field::LedStateOn),
            ("USB_DESC_VID", "USB_DESC_VID = 0x1239A", Field::UsbDescVid),
            ("BUTTON_PULL", "BUTTON_PULL = SIDEWAYS", Field::ButtonPull),
            ("UF2_BOARD_ID", "UF2_BOARD_ID = nRF52840-x-y", Field::Uf2BoardId),
            ("APA102_NUMBER", "APA102_NUMBER = 256", Field::Apa102Number),
            ("LED_APA102_CLK", "LED_APA102_CLK = _PINNUM(1 9)", Field::LedApa102Clk),
        ];
        for (key, line, field) in cases {
            let text = replace_line(ITSYBITSY, key, Some(line));
            assert_eq!(parse(&text).unwrap_err(), Error::InvalidValue(field), "{}", line);
        }
    }

    #[test]
    fn strings_borrow_from_input() {
        let board = parse(ITSYBITSY).unwrap();
        let start = ITSYBITSY.as_ptr() as usize;
        let end = start + ITSYBITSY.len();
        let label = board.uf2.volume_label.as_ptr() as usize;
        assert!(label >= start && label < end);
    }
}
