use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallerError};
use crate::model::Tool;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let tools = store.load_tools();
    let original_count = tools.len();
    let remaining: Vec<Tool> = tools.into_iter().filter(|t| t.id != id).collect();

    if remaining.len() == original_count {
        return Err(TallerError::ToolNotFound(id));
    }

    store.save_tools(&remaining)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Herramienta {id} eliminada exitosamente"
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::super::drill_input;
    use super::*;
    use crate::commands::tools::{create, get};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_the_matching_record() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, &drill_input()).unwrap();
        create::run(&mut store, &drill_input()).unwrap();

        run(&mut store, 1).unwrap();
        assert!(get::by_id(&store, 1).is_none());
        assert_eq!(store.load_tools().len(), 1);
    }

    #[test]
    fn missing_id_reports_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, 3).unwrap_err();
        assert!(matches!(err, TallerError::ToolNotFound(3)));
    }
}
