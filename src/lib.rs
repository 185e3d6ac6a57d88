//! Board descriptors for nRF52 UF2 bootloaders.
//!
//! Everything here is pure data and logic that runs on the host as well
//! as on target:
//!
//! - [`board`]: the descriptor record, its parts and validation
//! - [`boards`]: registry of supported boards, build-time selection
//! - [`format`]: build-config file rendering and parsing
//! - [`uf2_info`]: `INFO_UF2.TXT` / `INDEX.HTM` contents
//! - [`apa102`]: DotStar frame encoding and chain driver
//!
//! Usage: `cargo test` on the host. The bring-up firmware in `main.rs`
//! (feature `embedded`) builds on top of this library.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod apa102;
pub mod board;
pub mod boards;
pub mod config;
pub mod error;
pub mod format;
pub mod uf2_info;

pub use board::identity::UsbMode;
pub use board::BoardDescriptor;
pub use error::{Error, Field};
