use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallerError};
use crate::model::ToolState;
use crate::store::DataStore;

/// Narrow state transition: only the state field is validated and
/// rewritten. Any member of the closed set is reachable from any other;
/// no transition graph is enforced.
pub fn run<S: DataStore>(store: &mut S, id: u64, new_state: &str) -> Result<CmdResult> {
    let state = new_state.parse::<ToolState>().map_err(|_| {
        TallerError::Validation(vec![format!(
            "Estado debe ser uno de: {}",
            ToolState::values()
        )])
    })?;

    let mut tools = store.load_tools();
    let tool = tools
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TallerError::ToolNotFound(id))?;

    tool.state = state;
    let affected = tool.clone();
    store.save_tools(&tools)?;

    let mut result = CmdResult::default();
    result.tools.push(affected);
    result.add_message(CmdMessage::success(format!(
        "Estado actualizado a: {state}"
    )));
    Ok(result)
}
