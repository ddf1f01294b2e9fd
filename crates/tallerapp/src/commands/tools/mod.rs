use crate::commands::ToolInput;
use crate::error::{Result, TallerError};
use crate::model::{Tool, ToolState, ToolType};
use chrono::{NaiveDate, NaiveDateTime};

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;
pub mod update_state;

/// Build a persisted tool record from validated input.
pub(crate) fn build_tool(id: u64, input: &ToolInput, created_at: NaiveDateTime) -> Result<Tool> {
    let kind = input
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse::<ToolType>()
        .map_err(|_| {
            TallerError::Validation(vec![format!(
                "Tipo debe ser uno de: {}",
                ToolType::values()
            )])
        })?;

    let state = input
        .state
        .as_deref()
        .unwrap_or_default()
        .parse::<ToolState>()
        .map_err(|_| {
            TallerError::Validation(vec![format!(
                "Estado debe ser uno de: {}",
                ToolState::values()
            )])
        })?;

    let acquisition_date = NaiveDate::parse_from_str(
        input.acquisition_date.as_deref().unwrap_or_default(),
        "%Y-%m-%d",
    )
    .map_err(|_| {
        TallerError::Validation(vec![
            "Fecha de adquisición: Formato de fecha inválido. Use YYYY-MM-DD".to_string(),
        ])
    })?;

    Ok(Tool {
        id,
        name: trimmed(input.name.as_deref()),
        kind,
        brand: trimmed(input.brand.as_deref()),
        model: trimmed(input.model.as_deref()),
        serial_number: trimmed(input.serial_number.as_deref()),
        state,
        location: trimmed(input.location.as_deref()),
        acquisition_date,
        notes: trimmed(input.notes.as_deref()),
        created_at,
    })
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

#[cfg(test)]
pub(crate) fn drill_input() -> ToolInput {
    ToolInput {
        name: Some("Taladro de Banco Bosch PBD 40".into()),
        kind: Some("Máquina Eléctrica".into()),
        brand: Some("Bosch".into()),
        model: Some("PBD 40".into()),
        serial_number: Some("BSH2024001".into()),
        state: Some("Disponible".into()),
        location: Some("Taller de Carpintería - Estante A".into()),
        acquisition_date: Some("2024-01-15".into()),
        notes: Some("Taladro principal del taller".into()),
    }
}
