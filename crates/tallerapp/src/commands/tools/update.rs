use super::build_tool;
use crate::commands::{CmdMessage, CmdResult, ToolInput};
use crate::error::{Result, TallerError};
use crate::store::DataStore;
use crate::validate;

pub fn run<S: DataStore>(store: &mut S, id: u64, patch: &ToolInput) -> Result<CmdResult> {
    let mut tools = store.load_tools();
    let index = tools
        .iter()
        .position(|t| t.id == id)
        .ok_or(TallerError::ToolNotFound(id))?;

    let merged = ToolInput::from(&tools[index]).merge(patch);
    validate::tool(&merged).map_err(TallerError::Validation)?;

    // The id and creation timestamp survive any patch.
    let updated = build_tool(id, &merged, tools[index].created_at)?;

    tools[index] = updated.clone();
    store.save_tools(&tools)?;

    let mut result = CmdResult::default();
    result.tools.push(updated);
    result.add_message(CmdMessage::success(format!(
        "Herramienta {id} actualizada exitosamente"
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
    fn finds_the_record_by_id() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, &drill_input()).unwrap();
        create::run(&mut store, &drill_input()).unwrap();

        let patch = ToolInput {
            location: Some("Taller de Metales - Estante B".into()),
            ..Default::default()
        };
        run(&mut store, 2, &patch).unwrap();

        assert_eq!(
            get::by_id(&store, 2).unwrap().location,
            "Taller de Metales - Estante B"
        );
        // The sibling record is untouched.
        assert_eq!(
            get::by_id(&store, 1).unwrap().location,
            "Taller de Carpintería - Estante A"
        );
    }

    #[test]
    fn keeps_creation_timestamp_across_updates() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, &drill_input()).unwrap();
        let created_at = get::by_id(&store, 1).unwrap().created_at;

        let patch = ToolInput {
            notes: Some("Revisión anual pendiente".into()),
            ..Default::default()
        };
        run(&mut store, 1, &patch).unwrap();

        let tool = get::by_id(&store, 1).unwrap();
        assert_eq!(tool.created_at, created_at);
        assert_eq!(tool.notes, "Revisión anual pendiente");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, 5, &ToolInput::default()).unwrap_err();
        assert!(matches!(err, TallerError::ToolNotFound(5)));
    }

    #[test]
    fn merged_record_is_revalidated() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, &drill_input()).unwrap();

        let patch = ToolInput {
            acquisition_date: Some("ayer".into()),
            ..Default::default()
        };
        let err = run(&mut store, 1, &patch).unwrap_err();
        assert!(matches!(err, TallerError::Validation(_)));
        assert_eq!(
            get::by_id(&store, 1).unwrap().acquisition_date.to_string(),
            "2024-01-15"
        );
    }
}
