//! Identity strings and numbers a board presents over BLE, USB and the
//! UF2 mass-storage drive.

/// BLE Device Information Service strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BleIdentity<'a> {
    pub manufacturer: &'a str,
    pub model: &'a str,
}

/// USB composite-device presentation. Exactly one is active per boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UsbMode {
    /// Bootloader: UF2 mass storage + CDC.
    Uf2,
    /// Application / serial DFU: CDC only.
    CdcOnly,
}

/// USB vendor and per-mode product IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UsbIdentity {
    pub vid: u16,
    pub uf2_pid: u16,
    pub cdc_only_pid: u16,
}

impl UsbIdentity {
    /// Product ID to enumerate with in `mode`.
    pub const fn pid(&self, mode: UsbMode) -> u16 {
        match mode {
            UsbMode::Uf2 => self.uf2_pid,
            UsbMode::CdcOnly => self.cdc_only_pid,
        }
    }
}

/// Strings shown by the UF2 bootloader drive and its info files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uf2Identity<'a> {
    pub product_name: &'a str,
    /// FAT volume label, at most 11 upper-case characters.
    pub volume_label: &'a str,
    /// `<chip>-<board>-<revision>`.
    pub board_id: &'a str,
    pub index_url: &'a str,
}

impl<'a> Uf2Identity<'a> {
    /// Split the board ID into `(chip, board, revision)`.
    ///
    /// The board part may itself contain `-`; chip is everything before the
    /// first dash and revision everything after the last one.
    pub fn board_id_parts(&self) -> Option<(&'a str, &'a str, &'a str)> {
        let id = self.board_id;
        let (chip, rest) = id.split_once('-')?;
        let (board, revision) = rest.rsplit_once('-')?;
        Some((chip, board, revision))
    }
}
