use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallerError};
use crate::model::User;
use crate::store::DataStore;

/// Hard delete; there is no tombstone and the id is never reissued
/// while larger ids exist.
pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let users = store.load_users();
    let original_count = users.len();
    let remaining: Vec<User> = users.into_iter().filter(|u| u.id != id).collect();

    if remaining.len() == original_count {
        return Err(TallerError::UserNotFound(id));
    }

    store.save_users(&remaining)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Usuario {id} eliminado exitosamente"
    )));
    Ok(result)
}
