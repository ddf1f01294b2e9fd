//! # Storage Layer
//!
//! Persistence for the two record collections. The [`DataStore`] trait
//! keeps the command layer decoupled from where records actually live:
//!
//! - [`fs::FileStore`]: production storage, one JSON array file per
//!   collection inside a data directory passed at construction.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Load/save contract
//!
//! Loads never fail: an absent, unreadable, or malformed file yields the
//! empty collection, exactly as the original system treated "no data
//! yet". Malformed files are additionally reported through `tracing` so
//! real corruption is visible in logs without breaking old deployments.
//!
//! Saves rewrite the whole collection. `FileStore` writes to a temp file
//! and renames it into place, so a crash mid-save leaves the previous
//! file intact.
//!
//! ## Storage layout
//!
//! ```text
//! data/
//! ├── usuarios.json       # JSON array of user records (Spanish keys)
//! └── herramientas.json   # JSON array of tool records (English keys)
//! ```
//!
//! Record order inside a file is insertion order; it carries no meaning
//! beyond display order and round-trips unchanged.

use crate::error::Result;
use crate::model::{Tool, User};

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
///
/// Every operation works on a whole collection; callers hold the loaded
/// vector only for the duration of one logical operation.
pub trait DataStore {
    /// Load every user record. Missing or corrupt data reads as empty.
    fn load_users(&self) -> Vec<User>;

    /// Replace the user collection.
    fn save_users(&mut self, users: &[User]) -> Result<()>;

    /// Load every tool record. Missing or corrupt data reads as empty.
    fn load_tools(&self) -> Vec<Tool>;

    /// Replace the tool collection.
    fn save_tools(&mut self, tools: &[Tool]) -> Result<()>;
}
