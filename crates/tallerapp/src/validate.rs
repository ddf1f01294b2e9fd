//! Field-level validation. Pure functions: no I/O, no mutation.
//!
//! Errors are the human-readable Spanish strings the original program
//! showed its operators. Aggregate validators collect every failure
//! instead of stopping at the first, so a form full of mistakes is
//! reported in one pass. Required-field messages name the canonical
//! wire key of the field (Spanish for users, English for tools).

use crate::commands::{ToolInput, UserInput};
use crate::model::{ToolState, ToolType, UserType};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// One error per required field that is absent (`None`) or blank after
/// trimming.
pub fn required_fields(fields: &[(&str, Option<&str>)]) -> Vec<String> {
    let mut errors = Vec::new();
    for (name, value) in fields {
        match value {
            None => errors.push(format!("Campo requerido '{name}' no está presente")),
            Some(v) if v.trim().is_empty() => {
                errors.push(format!("Campo requerido '{name}' está vacío"));
            }
            Some(_) => {}
        }
    }
    errors
}

/// Empty is valid (email is optional); anything else must look like
/// `local@domain.tld` with a 2+ letter top-level segment.
pub fn email(value: &str) -> bool {
    value.is_empty() || EMAIL_RE.is_match(value)
}

/// Identity document: required, digits only, 7-8 digits after trimming.
pub fn document_number(value: &str) -> Result<(), String> {
    let document = value.trim();
    if document.is_empty() {
        return Err("Número de documento es requerido".into());
    }
    if !document.chars().all(|c| c.is_ascii_digit()) {
        return Err("El documento debe contener solo números".into());
    }
    if document.len() < 7 || document.len() > 8 {
        return Err("El documento debe tener entre 7 y 8 dígitos".into());
    }
    Ok(())
}

pub fn user_type(value: &str) -> Result<(), String> {
    value
        .parse::<UserType>()
        .map(drop)
        .map_err(|_| format!("Tipo de usuario debe ser uno de: {}", UserType::values()))
}

pub fn tool_state(value: &str) -> Result<(), String> {
    value
        .parse::<ToolState>()
        .map(drop)
        .map_err(|_| format!("Estado debe ser uno de: {}", ToolState::values()))
}

pub fn tool_type(value: &str) -> Result<(), String> {
    value
        .parse::<ToolType>()
        .map(drop)
        .map_err(|_| format!("Tipo debe ser uno de: {}", ToolType::values()))
}

pub fn maintenance_type(value: &str) -> Result<(), String> {
    value
        .parse::<crate::model::MaintenanceType>()
        .map(drop)
        .map_err(|_| {
            format!(
                "Tipo de mantenimiento debe ser: {}",
                crate::model::MaintenanceType::values()
            )
        })
}

pub fn assignment_status(value: &str) -> Result<(), String> {
    value
        .parse::<crate::model::AssignmentStatus>()
        .map(drop)
        .map_err(|_| {
            format!(
                "Estado debe ser uno de: {}",
                crate::model::AssignmentStatus::values()
            )
        })
}

/// Strict `YYYY-MM-DD` calendar date.
pub fn date(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Fecha es requerida".into());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(drop)
        .map_err(|_| "Formato de fecha inválido. Use YYYY-MM-DD".into())
}

/// Aggregate user validation: required fields, document, type
/// membership, optional email, and the type-conditional requirements
/// (Estudiante needs curso, Personal needs rol).
pub fn user(input: &UserInput) -> Result<(), Vec<String>> {
    let mut errors = required_fields(&[
        ("nombre", input.first_name.as_deref()),
        ("apellido", input.last_name.as_deref()),
        ("documento", input.document.as_deref()),
        ("tipo_usuario", input.kind.as_deref()),
    ]);

    if let Some(document) = input.document.as_deref() {
        if let Err(e) = document_number(document) {
            errors.push(e);
        }
    }

    if let Some(kind) = input.kind.as_deref() {
        if let Err(e) = user_type(kind) {
            errors.push(e);
        }
    }

    if let Some(value) = input.email.as_deref() {
        if !email(value) {
            errors.push("Formato de email inválido".into());
        }
    }

    match input.kind.as_deref() {
        Some(kind) if kind == UserType::Student.as_str() => {
            errors.extend(required_fields(&[("curso", input.course.as_deref())]));
        }
        Some(kind) if kind == UserType::Staff.as_str() => {
            errors.extend(required_fields(&[("rol", input.role.as_deref())]));
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Aggregate tool validation over the fixed required set plus type,
/// state, and acquisition-date format.
pub fn tool(input: &ToolInput) -> Result<(), Vec<String>> {
    let mut errors = required_fields(&[
        ("name", input.name.as_deref()),
        ("type", input.kind.as_deref()),
        ("brand", input.brand.as_deref()),
        ("state", input.state.as_deref()),
        ("location", input.location.as_deref()),
        ("acquisition_date", input.acquisition_date.as_deref()),
    ]);

    if let Some(kind) = input.kind.as_deref() {
        if let Err(e) = tool_type(kind) {
            errors.push(e);
        }
    }

    if let Some(state) = input.state.as_deref() {
        if let Err(e) = tool_state(state) {
            errors.push(e);
        }
    }

    if let Some(value) = input.acquisition_date.as_deref() {
        if let Err(e) = date(value) {
            errors.push(format!("Fecha de adquisición: {e}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
