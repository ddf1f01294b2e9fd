//! Business logic, one module per operation. Every mutating operation
//! follows the same shape: load the collection, validate, mutate the
//! in-memory copy, persist the whole collection. Nothing here touches
//! stdin/stdout; results come back as [`CmdResult`] values for the UI
//! to render.

use crate::model::{Tool, User};

pub mod tools;
pub mod users;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command: the records it touched, the id a
/// create handed out, and messages for the UI.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub users: Vec<User>,
    pub tools: Vec<Tool>,
    pub created_id: Option<u64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Raw user field values as entered, before validation. `None` means
/// the field was not supplied; for updates that reads as "keep the
/// current value", for creates as "absent".
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub document: Option<String>,
    pub kind: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub workshops: Option<Vec<String>>,
    pub role: Option<String>,
    pub department: Option<String>,
}

impl UserInput {
    /// True when no field was supplied at all (an empty patch).
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.document.is_none()
            && self.kind.is_none()
            && self.email.is_none()
            && self.course.is_none()
            && self.workshops.is_none()
            && self.role.is_none()
            && self.department.is_none()
    }

    /// Shallow overlay: every supplied patch field replaces the base
    /// value, everything else stays.
    pub fn merge(mut self, patch: &UserInput) -> UserInput {
        if let Some(v) = &patch.first_name {
            self.first_name = Some(v.clone());
        }
        if let Some(v) = &patch.last_name {
            self.last_name = Some(v.clone());
        }
        if let Some(v) = &patch.document {
            self.document = Some(v.clone());
        }
        if let Some(v) = &patch.kind {
            self.kind = Some(v.clone());
        }
        if let Some(v) = &patch.email {
            self.email = Some(v.clone());
        }
        if let Some(v) = &patch.course {
            self.course = Some(v.clone());
        }
        if let Some(v) = &patch.workshops {
            self.workshops = Some(v.clone());
        }
        if let Some(v) = &patch.role {
            self.role = Some(v.clone());
        }
        if let Some(v) = &patch.department {
            self.department = Some(v.clone());
        }
        self
    }
}

impl From<&User> for UserInput {
    fn from(user: &User) -> Self {
        UserInput {
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            document: Some(user.document.clone()),
            kind: Some(user.kind.as_str().to_string()),
            email: Some(user.email.clone()),
            course: user.course.clone(),
            workshops: user.workshops.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
        }
    }
}

/// Raw tool field values as entered, before validation.
#[derive(Debug, Clone, Default)]
pub struct ToolInput {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub state: Option<String>,
    pub location: Option<String>,
    pub acquisition_date: Option<String>,
    pub notes: Option<String>,
}

impl ToolInput {
    /// True when no field was supplied at all (an empty patch).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.serial_number.is_none()
            && self.state.is_none()
            && self.location.is_none()
            && self.acquisition_date.is_none()
            && self.notes.is_none()
    }

    pub fn merge(mut self, patch: &ToolInput) -> ToolInput {
        if let Some(v) = &patch.name {
            self.name = Some(v.clone());
        }
        if let Some(v) = &patch.kind {
            self.kind = Some(v.clone());
        }
        if let Some(v) = &patch.brand {
            self.brand = Some(v.clone());
        }
        if let Some(v) = &patch.model {
            self.model = Some(v.clone());
        }
        if let Some(v) = &patch.serial_number {
            self.serial_number = Some(v.clone());
        }
        if let Some(v) = &patch.state {
            self.state = Some(v.clone());
        }
        if let Some(v) = &patch.location {
            self.location = Some(v.clone());
        }
        if let Some(v) = &patch.acquisition_date {
            self.acquisition_date = Some(v.clone());
        }
        if let Some(v) = &patch.notes {
            self.notes = Some(v.clone());
        }
        self
    }
}

impl From<&Tool> for ToolInput {
    fn from(tool: &Tool) -> Self {
        ToolInput {
            name: Some(tool.name.clone()),
            kind: Some(tool.kind.as_str().to_string()),
            brand: Some(tool.brand.clone()),
            model: Some(tool.model.clone()),
            serial_number: Some(tool.serial_number.clone()),
            state: Some(tool.state.as_str().to_string()),
            location: Some(tool.location.clone()),
            acquisition_date: Some(tool.acquisition_date.to_string()),
            notes: Some(tool.notes.clone()),
        }
    }
}
