//! Unit tests for descriptor validation.
//!
//! Each test starts from a known-good board and breaks exactly one field,
//! checking that the error names that field.

use super::button::{ButtonGroup, Pull};
use super::led::{Apa102, Neopixel, RgbLed};
use super::pin::{Chip, Pin};
use super::validate::{check_board_id, validate, volume_label};
use super::{BoardDescriptor, Field};
use crate::boards::itsybitsy_nrf52840_express::BOARD as ITSYBITSY;
use crate::error::{Error, Reason};

fn invalid(field: Field, reason: Reason) -> Result<(), Error> {
    Err(Error::Invalid { field, reason })
}

fn with_apa102(board: &mut BoardDescriptor<'_>, f: impl FnOnce(&mut Apa102)) {
    let mut a = *board.leds.apa102().unwrap();
    f(&mut a);
    board.leds.rgb = Some(RgbLed::Apa102(a));
}

// ═══════════════════════════════════════════════════════════════════════════
// Reference board
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn itsybitsy_validates() {
    assert_eq!(validate(&ITSYBITSY), Ok(()));
}

#[test]
fn itsybitsy_pins() {
    assert_eq!(ITSYBITSY.leds.primary.raw(), 6);
    let dotstar = ITSYBITSY.leds.apa102().unwrap();
    assert_eq!(dotstar.clock.raw(), 41);
    assert_eq!(dotstar.data.raw(), 8);
    assert_eq!(ITSYBITSY.buttons.count(), 2);
    assert_eq!(ITSYBITSY.buttons.get(1).map(Pin::raw), Some(29));
    assert_eq!(ITSYBITSY.buttons.get(2).map(Pin::raw), Some(34));
}

#[test]
fn pins_lists_every_assignment_in_order() {
    let fields: std::vec::Vec<Field> = ITSYBITSY.pins().map(|(f, _)| f).collect();
    assert_eq!(
        fields,
        [
            Field::LedPrimaryPin,
            Field::LedApa102Clk,
            Field::LedApa102Data,
            Field::Button(1),
            Field::Button(2),
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Pins
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn pin_missing_from_chip_rejected() {
    let mut board = ITSYBITSY;
    board.leds.primary = Pin::new(1, 20);
    assert_eq!(
        validate(&board),
        invalid(Field::LedPrimaryPin, Reason::PinNotOnChip)
    );
}

#[test]
fn pin_geometry_follows_board_id_chip() {
    let mut board = ITSYBITSY;
    board.uf2.board_id = "nRF52832-ItsyBitsy-revA";
    // P1.09 (DotStar clock) does not exist on the 52832.
    assert_eq!(
        validate(&board),
        invalid(Field::LedApa102Clk, Reason::PinNotOnChip)
    );
}

#[test]
fn shared_pin_rejected() {
    let mut board = ITSYBITSY;
    board.buttons = ButtonGroup::new(Pull::Up, &[Pin::new(0, 29), Pin::new(0, 6)]);
    assert_eq!(
        validate(&board),
        Err(Error::PinConflict {
            first: Field::LedPrimaryPin,
            second: Field::Button(2),
        })
    );
}

#[test]
fn duplicate_button_pin_rejected() {
    let mut board = ITSYBITSY;
    board.buttons = ButtonGroup::new(Pull::Up, &[Pin::new(0, 29), Pin::new(0, 29)]);
    assert_eq!(
        validate(&board),
        Err(Error::PinConflict {
            first: Field::Button(1),
            second: Field::Button(2),
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// LEDs and buttons
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn apa102_brightness_is_five_bits() {
    let mut board = ITSYBITSY;
    with_apa102(&mut board, |a| a.brightness = 31);
    assert_eq!(validate(&board), Ok(()));

    with_apa102(&mut board, |a| a.brightness = 32);
    assert_eq!(
        validate(&board),
        invalid(Field::LedApa102Brightness, Reason::BrightnessOutOfRange)
    );
}

#[test]
fn rgb_led_count_must_be_nonzero() {
    let mut board = ITSYBITSY;
    with_apa102(&mut board, |a| a.count = 0);
    assert_eq!(
        validate(&board),
        invalid(Field::Apa102Number, Reason::ZeroCount)
    );

    board.leds.rgb = Some(RgbLed::Neopixel(Neopixel {
        data: Pin::new(0, 16),
        count: 0,
    }));
    assert_eq!(
        validate(&board),
        invalid(Field::NeopixelsNumber, Reason::ZeroCount)
    );
}

#[test]
fn board_without_rgb_led_validates() {
    let mut board = ITSYBITSY;
    board.leds.rgb = None;
    assert_eq!(validate(&board), Ok(()));
    assert_eq!(board.pins().count(), 3);
}

#[test]
fn at_least_one_button_required() {
    let mut board = ITSYBITSY;
    board.buttons = ButtonGroup::new(Pull::Up, &[]);
    assert_eq!(
        validate(&board),
        invalid(Field::ButtonsNumber, Reason::ZeroCount)
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Identity strings
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn volume_label_rules() {
    assert_eq!(volume_label("ITSY840BOOT"), Ok(()));
    assert_eq!(volume_label("NRF52 BOOT"), Ok(()));
    assert_eq!(volume_label("BOOT_1~"), Ok(()));

    let field = Field::Uf2VolumeLabel;
    assert_eq!(volume_label(""), invalid(field, Reason::Empty));
    assert_eq!(volume_label("ITSY840BOOTX"), invalid(field, Reason::TooLong));
    assert_eq!(volume_label("Itsy840Boot"), invalid(field, Reason::Lowercase));
    assert_eq!(volume_label(" BOOT"), invalid(field, Reason::LeadingSpace));
    assert_eq!(volume_label("BOOT.X"), invalid(field, Reason::ForbiddenChar));
    assert_eq!(volume_label("BOOT*"), invalid(field, Reason::ForbiddenChar));
    assert_eq!(volume_label("BOOT\t"), invalid(field, Reason::NotPrintable));
}

#[test]
fn board_id_rules() {
    assert!(check_board_id("nRF52840-ItsyBitsy-revA").is_ok());
    assert!(check_board_id("nRF52840-Feather-Sense-revB").is_ok());

    let field = Field::Uf2BoardId;
    let err = |reason| -> Result<Chip, Error> { Err(Error::Invalid { field, reason }) };
    assert_eq!(check_board_id("nRF52840-ItsyBitsy"), err(Reason::BadFormat));
    assert_eq!(check_board_id("nRF52840--revA"), err(Reason::BadFormat));
    assert_eq!(check_board_id("-ItsyBitsy-revA"), err(Reason::BadFormat));
    assert_eq!(check_board_id("ATSAMD21-Itsy-revA"), err(Reason::UnknownChip));
    assert_eq!(check_board_id("nRF52840-Itsy Bitsy-revA"), err(Reason::ForbiddenChar));
}

#[test]
fn strings_must_be_printable_and_unquoted() {
    let mut board = ITSYBITSY;
    board.ble.model = "";
    assert_eq!(validate(&board), invalid(Field::BledisModel, Reason::Empty));

    let mut board = ITSYBITSY;
    board.ble.manufacturer = "Adafruit \"Industries\"";
    assert_eq!(
        validate(&board),
        invalid(Field::BledisManufacturer, Reason::ForbiddenChar)
    );

    let mut board = ITSYBITSY;
    board.uf2.product_name = "ItsyBitsy\u{e9}";
    assert_eq!(
        validate(&board),
        invalid(Field::Uf2ProductName, Reason::NotPrintable)
    );
}

#[test]
fn product_name_fits_usb_string_descriptor() {
    let long = [b'A'; 127];
    let mut board = ITSYBITSY;
    board.uf2.product_name = core::str::from_utf8(&long).unwrap();
    assert_eq!(
        validate(&board),
        invalid(Field::Uf2ProductName, Reason::TooLong)
    );
    board.uf2.product_name = core::str::from_utf8(&long[..126]).unwrap();
    assert_eq!(validate(&board), Ok(()));
}

#[test]
fn index_url_rules() {
    let mut board = ITSYBITSY;
    for url in ["ftp://adafruit.com", "https://", "www.adafruit.com"] {
        board.uf2.index_url = url;
        assert_eq!(
            validate(&board),
            invalid(Field::Uf2IndexUrl, Reason::BadFormat),
            "{}",
            url
        );
    }
    board.uf2.index_url = "https://www.adafruit.com/some page";
    assert_eq!(
        validate(&board),
        invalid(Field::Uf2IndexUrl, Reason::ForbiddenChar)
    );
    board.uf2.index_url = "http://example.com";
    assert_eq!(validate(&board), Ok(()));
}

// ═══════════════════════════════════════════════════════════════════════════
// USB identity
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn pids_must_differ() {
    let mut board = ITSYBITSY;
    board.usb.cdc_only_pid = board.usb.uf2_pid;
    assert_eq!(
        validate(&board),
        invalid(Field::UsbDescCdcOnlyPid, Reason::PidCollision)
    );
}

#[test]
fn usb_ids_must_be_nonzero() {
    let mut board = ITSYBITSY;
    board.usb.vid = 0;
    assert_eq!(validate(&board), invalid(Field::UsbDescVid, Reason::Zero));

    let mut board = ITSYBITSY;
    board.usb.uf2_pid = 0;
    assert_eq!(validate(&board), invalid(Field::UsbDescUf2Pid, Reason::Zero));

    let mut board = ITSYBITSY;
    board.usb.cdc_only_pid = 0;
    assert_eq!(
        validate(&board),
        invalid(Field::UsbDescCdcOnlyPid, Reason::Zero)
    );
}

#[test]
fn error_message_names_field() {
    let err = Error::Invalid {
        field: Field::Uf2VolumeLabel,
        reason: Reason::TooLong,
    };
    assert_eq!(std::format!("{}", err), "UF2_VOLUME_LABEL: is too long");
    assert_eq!(err.field(), Some(Field::Uf2VolumeLabel));

    let conflict = Error::PinConflict {
        first: Field::LedPrimaryPin,
        second: Field::Button(2),
    };
    assert_eq!(
        std::format!("{}", conflict),
        "BUTTON_2: same pin as LED_PRIMARY_PIN"
    );
}

#[test]
fn field_keys_round_trip() {
    for field in Field::NAMED {
        assert_eq!(Field::from_key(field.key()), Some(field));
    }
    assert_eq!(Field::from_key("BUTTON_3"), Some(Field::Button(3)));
    assert_eq!(Field::from_key("BUTTON_0"), None);
    assert_eq!(Field::from_key("BUTTON_255"), Some(Field::Button(255)));
    assert_eq!(Field::from_key("BUTTON_300"), None);
    assert_eq!(Field::from_key("BUTTON_PULL"), Some(Field::ButtonPull));
    assert_eq!(Field::from_key("LED_TERTIARY_PIN"), None);
}
