//! Text of the info files on the UF2 bootloader drive.
//!
//! `INFO_UF2.TXT` identifies the board to flashing tools; `INDEX.HTM`
//! redirects a browser to the board's product page.

use core::fmt::{self, Write};

use crate::board::BoardDescriptor;

pub const INFO_UF2_FILE_NAME: &str = "INFO_UF2.TXT";
pub const INDEX_FILE_NAME: &str = "INDEX.HTM";

/// Write `INFO_UF2.TXT`. Lines end in CRLF.
pub fn write_info_uf2<W: Write>(
    board: &BoardDescriptor<'_>,
    bootloader_version: &str,
    out: &mut W,
) -> fmt::Result {
    write!(out, "UF2 Bootloader {}\r\n", bootloader_version)?;
    write!(out, "Model: {}\r\n", board.uf2.product_name)?;
    write!(out, "Board-ID: {}\r\n", board.uf2.board_id)
}

/// Tracks a serial port's DTR line so `INFO_UF2.TXT` is printed once per
/// open rather than on every poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortOpen {
    open: bool,
}

impl PortOpen {
    /// Feed the current DTR state; `true` only when the port just opened.
    pub fn update(&mut self, dtr: bool) -> bool {
        let opened = dtr && !self.open;
        self.open = dtr;
        opened
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Write `INDEX.HTM`, a redirect to `UF2_INDEX_URL`.
pub fn write_index_htm<W: Write>(board: &BoardDescriptor<'_>, out: &mut W) -> fmt::Result {
    out.write_str("<!doctype html>\n<html><body><script>\n")?;
    write!(out, "location.replace(\"{}\");\n", board.uf2.index_url)?;
    out.write_str("</script></body></html>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::itsybitsy_nrf52840_express::BOARD;

    #[test]
    fn info_uf2_names_model_and_board_id() {
        let mut out: heapless::String<256> = heapless::String::new();
        write_info_uf2(&BOARD, "0.1.0", &mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "UF2 Bootloader 0.1.0\r\n\
             Model: Adafruit ItsyBitsy nRF52840 Express\r\n\
             Board-ID: nRF52840-ItsyBitsy-revA\r\n"
        );
    }

    #[test]
    fn index_redirects_to_index_url() {
        let mut out: heapless::String<256> = heapless::String::new();
        write_index_htm(&BOARD, &mut out).unwrap();
        assert!(out.contains("location.replace(\"https://www.adafruit.com/\");"));
        assert!(out.starts_with("<!doctype html>"));
    }

    #[test]
    fn info_printed_once_per_open() {
        let mut port = PortOpen::default();
        assert!(!port.update(false));
        assert!(port.update(true));
        // Repeated polls while the port stays open print nothing.
        assert!(!port.update(true));
        assert!(!port.update(true));
        assert!(port.is_open());

        assert!(!port.update(false));
        assert!(!port.is_open());
        assert!(port.update(true));
    }

    #[test]
    fn info_uf2_overflow_is_an_error() {
        let mut out: heapless::String<16> = heapless::String::new();
        assert!(write_info_uf2(&BOARD, "0.1.0", &mut out).is_err());
    }
}
