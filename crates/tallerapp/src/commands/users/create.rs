use super::build_user;
use crate::commands::{CmdMessage, CmdResult, UserInput};
use crate::error::{Result, TallerError};
use crate::ids;
use crate::store::DataStore;
use crate::validate;

pub fn run<S: DataStore>(store: &mut S, input: &UserInput) -> Result<CmdResult> {
    validate::user(input).map_err(TallerError::Validation)?;

    let mut users = store.load_users();

    let document = input
        .document
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();
    if users.iter().any(|u| u.document.trim() == document) {
        return Err(TallerError::Duplicate(format!(
            "Ya existe un usuario con documento {document}"
        )));
    }

    let id = ids::next_id(&users);
    let user = build_user(id, input)?;
    users.push(user.clone());
    store.save_users(&users)?;

    let mut result = CmdResult::default();
    result.created_id = Some(id);
    result.users.push(user);
    result.add_message(CmdMessage::success(format!(
        "Usuario creado exitosamente con ID {id}"
    )));
    Ok(result)
}
