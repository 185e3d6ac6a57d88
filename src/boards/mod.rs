//! Registry of supported boards.
//!
//! Firmware picks exactly one board at build time: `build.rs` reads the
//! `BOARD` environment variable (default [`DEFAULT_BOARD`]) and exports it
//! as `UF2_BOARD`, which [`selected`] resolves against this table.
//!
//! Adding a board: create `src/boards/<name>.rs` with a `BOARD` constant
//! and list it in [`ALL`].
//!
//! [`DEFAULT_BOARD`]: crate::config::DEFAULT_BOARD

pub mod feather_nrf52840_express;
pub mod itsybitsy_nrf52840_express;
pub mod pca10056;

use crate::board::validate::validate;
use crate::board::BoardDescriptor;
use crate::error::Error;

/// Every registered board.
pub static ALL: &[&BoardDescriptor<'static>] = &[
    &itsybitsy_nrf52840_express::BOARD,
    &feather_nrf52840_express::BOARD,
    &pca10056::BOARD,
];

/// Board name chosen at build time.
pub const SELECTED_BOARD: &str = env!("UF2_BOARD");

/// Look up a registered board by its target name.
pub fn find(name: &str) -> Result<&'static BoardDescriptor<'static>, Error> {
    ALL.iter()
        .copied()
        .find(|b| b.name == name)
        .ok_or(Error::UnknownBoard)
}

/// The build-time board, validated.
pub fn selected() -> Result<&'static BoardDescriptor<'static>, Error> {
    let board = find(SELECTED_BOARD)?;
    validate(board)?;
    debug!("selected board {=str}", board.name);
    Ok(board)
}
