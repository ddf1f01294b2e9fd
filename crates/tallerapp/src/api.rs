//! # API Facade
//!
//! Thin entry point over the command layer, the single surface any UI
//! should talk to. It dispatches, nothing more: no business logic, no
//! I/O, no presentation concerns.
//!
//! `TallerApi<S: DataStore>` is generic over the storage backend:
//! production runs `TallerApi<FileStore>`, tests run
//! `TallerApi<InMemoryStore>` without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Tool, ToolState, User};
use crate::store::DataStore;

pub use crate::commands::tools::search::ToolFilter;
pub use crate::commands::users::search::UserQuery;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ToolInput, UserInput};

pub struct TallerApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TallerApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // Users

    pub fn create_user(&mut self, input: &UserInput) -> Result<CmdResult> {
        commands::users::create::run(&mut self.store, input)
    }

    pub fn user_by_id(&self, id: u64) -> Option<User> {
        commands::users::get::by_id(&self.store, id)
    }

    pub fn user_by_document(&self, document: &str) -> Option<User> {
        commands::users::get::by_document(&self.store, document)
    }

    pub fn list_users(&self) -> Vec<User> {
        commands::users::list::run(&self.store)
    }

    pub fn search_users(&self, query: &UserQuery) -> Vec<User> {
        commands::users::search::run(&self.store, query)
    }

    pub fn update_user(&mut self, id: u64, patch: &UserInput) -> Result<CmdResult> {
        commands::users::update::run(&mut self.store, id, patch)
    }

    pub fn delete_user(&mut self, id: u64) -> Result<CmdResult> {
        commands::users::delete::run(&mut self.store, id)
    }

    // Tools

    pub fn create_tool(&mut self, input: &ToolInput) -> Result<CmdResult> {
        commands::tools::create::run(&mut self.store, input)
    }

    pub fn tool_by_id(&self, id: u64) -> Option<Tool> {
        commands::tools::get::by_id(&self.store, id)
    }

    pub fn list_tools(&self) -> Vec<Tool> {
        commands::tools::list::run(&self.store)
    }

    pub fn search_tools(&self, filter: &ToolFilter) -> Vec<Tool> {
        commands::tools::search::run(&self.store, filter)
    }

    pub fn tools_by_state(&self, state: ToolState) -> Vec<Tool> {
        commands::tools::search::by_state(&self.store, state)
    }

    pub fn available_tools(&self) -> Vec<Tool> {
        commands::tools::search::available(&self.store)
    }

    pub fn update_tool(&mut self, id: u64, patch: &ToolInput) -> Result<CmdResult> {
        commands::tools::update::run(&mut self.store, id, patch)
    }

    pub fn update_tool_state(&mut self, id: u64, new_state: &str) -> Result<CmdResult> {
        commands::tools::update_state::run(&mut self.store, id, new_state)
    }

    pub fn delete_tool(&mut self, id: u64) -> Result<CmdResult> {
        commands::tools::delete::run(&mut self.store, id)
    }
}
