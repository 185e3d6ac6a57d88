//! Build script - selects the target board and copies the linker script
//! into the output directory so that the linker can find it at link time.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with `config::DEFAULT_BOARD`.
const DEFAULT_BOARD: &str = "itsybitsy_nrf52840_express";

fn main() {
    // Board selection: `BOARD=feather_nrf52840_express cargo build ...`
    let board = env::var("BOARD").unwrap_or_else(|_| DEFAULT_BOARD.to_string());
    check_board(&board);
    println!("cargo:rustc-env=UF2_BOARD={}", board);
    println!("cargo:rerun-if-env-changed=BOARD");

    // The linker script is only needed for the firmware binary.
    if env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
        fs::copy("memory.x", out_dir.join("memory.x")).unwrap();
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory.x");

        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}

/// A board is registered when `src/boards/<name>.rs` exists and
/// `src/boards/mod.rs` declares it.
fn check_board(board: &str) {
    let valid_name = !board.is_empty()
        && board
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if !valid_name {
        panic!("BOARD={:?} is not a valid board name", board);
    }

    let registry = fs::read_to_string("src/boards/mod.rs").unwrap();
    let declared = registry
        .lines()
        .any(|line| line.trim() == format!("pub mod {};", board));
    let file = PathBuf::from("src/boards").join(format!("{}.rs", board));
    if !declared || !file.exists() {
        panic!(
            "BOARD={:?} is not a registered board (expected src/boards/{}.rs listed in src/boards/mod.rs)",
            board, board
        );
    }
    println!("cargo:rerun-if-changed=src/boards/mod.rs");
}
