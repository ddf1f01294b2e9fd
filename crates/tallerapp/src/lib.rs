//! # Tallerapp Architecture
//!
//! Tallerapp is a **UI-agnostic inventory library** for a school
//! workshop: it tracks the people who use the workshop (students,
//! staff, administrators) and the tools and machines they work with,
//! persisted as plain JSON files. The interactive menu that ships in
//! the `taller` binary is just one client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/taller)                                  │
//! │  - Menu loop, prompting, terminal rendering                 │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/users/*, commands/tools/*)         │
//! │  - load → validate → mutate → persist, per operation        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, never writes to stdout/stderr, and never assumes
//! a terminal. The same core could serve a web UI unchanged.
//!
//! Every operation reloads its collection from the store and persists
//! the whole collection back; records are held in memory only for the
//! duration of one call. That keeps the model trivially consistent for
//! a single interactive user, which is the deployment this system is
//! built for.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record types and the closed enumerations
//! - [`validate`]: Pure field validation with accumulated errors
//! - [`ids`]: Auto-increment identifier allocation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
pub mod validate;
