//! # Taller CLI
//!
//! Interactive menu client for the `tallerapp` library. The binary is
//! intentionally thin: the CLI lives in `src/cli/`, this file only
//! invokes `cli::run()` and handles process termination.
//!
//! Everything from the library's `api.rs` inward is UI agnostic; this
//! crate owns all user-facing concerns — flag parsing, the menu loop,
//! prompting, dispatch, error rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
