use super::build_user;
use crate::commands::{CmdMessage, CmdResult, UserInput};
use crate::error::{Result, TallerError};
use crate::store::DataStore;
use crate::validate;

pub fn run<S: DataStore>(store: &mut S, id: u64, patch: &UserInput) -> Result<CmdResult> {
    let mut users = store.load_users();
    let index = users
        .iter()
        .position(|u| u.id == id)
        .ok_or(TallerError::UserNotFound(id))?;

    // Shallow merge over the stored record, then revalidate the whole.
    let merged = UserInput::from(&users[index]).merge(patch);
    validate::user(&merged).map_err(TallerError::Validation)?;

    // The id is pinned no matter what the patch carries.
    let updated = build_user(id, &merged)?;

    let document = updated.document.clone();
    if users
        .iter()
        .enumerate()
        .any(|(i, u)| i != index && u.document.trim() == document)
    {
        return Err(TallerError::Duplicate(format!(
            "Ya existe otro usuario con documento {document}"
        )));
    }

    users[index] = updated.clone();
    store.save_users(&users)?;

    let mut result = CmdResult::default();
    result.users.push(updated);
    result.add_message(CmdMessage::success(format!(
        "Usuario {id} actualizado exitosamente"
    )));
    Ok(result)
}
