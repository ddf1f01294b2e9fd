use super::build_tool;
use crate::commands::{CmdMessage, CmdResult, ToolInput};
use crate::error::{Result, TallerError};
use crate::ids;
use crate::store::DataStore;
use crate::validate;
use chrono::Local;

/// Serial numbers are deliberately not checked for uniqueness; the
/// workshop owns several identical consumables and kits.
pub fn run<S: DataStore>(store: &mut S, input: &ToolInput) -> Result<CmdResult> {
    validate::tool(input).map_err(TallerError::Validation)?;

    let mut tools = store.load_tools();
    let id = ids::next_id(&tools);
    let tool = build_tool(id, input, Local::now().naive_local())?;
    tools.push(tool.clone());
    store.save_tools(&tools)?;

    let mut result = CmdResult::default();
    result.created_id = Some(id);
    result.tools.push(tool);
    result.add_message(CmdMessage::success(format!(
        "Herramienta creada exitosamente con ID {id}"
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::super::drill_input;
    use super::*;
    use crate::model::{ToolState, ToolType};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_tool_and_stamps_creation_time() {
        let mut store = InMemoryStore::new();
        let before = Local::now().naive_local();
        let result = run(&mut store, &drill_input()).unwrap();
        let after = Local::now().naive_local();

        assert_eq!(result.created_id, Some(1));
        let tool = &store.load_tools()[0];
        assert_eq!(tool.kind, ToolType::ElectricMachine);
        assert_eq!(tool.state, ToolState::Available);
        assert!(tool.created_at >= before && tool.created_at <= after);
    }

    #[test]
    fn duplicate_serial_numbers_are_permitted() {
        let mut store = InMemoryStore::new();
        run(&mut store, &drill_input()).unwrap();
        let result = run(&mut store, &drill_input()).unwrap();

        assert_eq!(result.created_id, Some(2));
        assert_eq!(store.load_tools().len(), 2);
    }

    #[test]
    fn invalid_input_collects_every_error() {
        let mut store = InMemoryStore::new();
        let input = ToolInput {
            name: Some(String::new()),
            kind: Some("Tipo Inexistente".into()),
            state: Some("Estado Inválido".into()),
            location: Some(String::new()),
            acquisition_date: Some("fecha-inválida".into()),
            ..Default::default()
        };

        let err = run(&mut store, &input).unwrap_err();
        match err {
            TallerError::Validation(errors) => {
                // blank name, missing brand, blank location, bad type,
                // bad state, bad date
                assert_eq!(errors.len(), 6);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.load_tools().is_empty());
    }
}
