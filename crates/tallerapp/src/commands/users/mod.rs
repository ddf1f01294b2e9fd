use crate::commands::UserInput;
use crate::error::{Result, TallerError};
use crate::model::{User, UserType};

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

/// Build a persisted user record from validated input. Core fields are
/// trimmed; type-conditional fields are set only for the matching type
/// (students get an empty workshop list by default).
pub(crate) fn build_user(id: u64, input: &UserInput) -> Result<User> {
    let kind = input
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse::<UserType>()
        .map_err(|_| {
            TallerError::Validation(vec![format!(
                "Tipo de usuario debe ser uno de: {}",
                UserType::values()
            )])
        })?;

    let mut user = User {
        id,
        first_name: trimmed(input.first_name.as_deref()),
        last_name: trimmed(input.last_name.as_deref()),
        document: trimmed(input.document.as_deref()),
        kind,
        email: trimmed(input.email.as_deref()),
        course: None,
        workshops: None,
        role: None,
        department: None,
    };

    match kind {
        UserType::Student => {
            user.course = Some(trimmed(input.course.as_deref()));
            user.workshops = Some(input.workshops.clone().unwrap_or_default());
        }
        UserType::Staff => {
            user.role = Some(trimmed(input.role.as_deref()));
            user.department = Some(trimmed(input.department.as_deref()));
        }
        UserType::Administrator => {}
    }

    Ok(user)
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

#[cfg(test)]
pub(crate) fn student_input(first: &str, last: &str, document: &str, course: &str) -> UserInput {
    UserInput {
        first_name: Some(first.into()),
        last_name: Some(last.into()),
        document: Some(document.into()),
        kind: Some("Estudiante".into()),
        course: Some(course.into()),
        ..Default::default()
    }
}
