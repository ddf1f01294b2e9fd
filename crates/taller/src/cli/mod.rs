//! # CLI Layer
//!
//! The menu-driven terminal client. This module is the **only** place
//! in the codebase that knows about stdin/stdout, colors, or process
//! exits; everything else returns structured values.
//!
//! Structure:
//! - `setup.rs`: clap flag parsing (`--data-dir`, `--verbose`)
//! - `menu.rs`: the interactive menu loops and per-operation flows
//! - `prompt.rs`: line-reading helpers (EOF-aware for piped input)
//! - `print.rs`: colored rendering of records and command messages

mod menu;
mod print;
mod prompt;
mod setup;

use anyhow::Result;
use clap::Parser;
use setup::Cli;
use tallerapp::api::TallerApi;
use tallerapp::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TALLER_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut api = TallerApi::new(FileStore::new(cli.data_dir));
    menu::main_menu(&mut api)
}
