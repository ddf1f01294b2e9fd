use super::DataStore;
use crate::error::{Result, TallerError};
use crate::model::{Tool, User};

/// In-memory store for tests. No persistence; writes can be made to fail
/// on demand so error paths stay testable.
#[derive(Default)]
pub struct InMemoryStore {
    users: Vec<User>,
    tools: Vec<Tool>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with a store error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(TallerError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load_users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn save_users(&mut self, users: &[User]) -> Result<()> {
        self.check_write()?;
        self.users = users.to_vec();
        Ok(())
    }

    fn load_tools(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    fn save_tools(&mut self, tools: &[Tool]) -> Result<()> {
        self.check_write()?;
        self.tools = tools.to_vec();
        Ok(())
    }
}
