use crate::model::{User, UserType};
use crate::store::DataStore;

/// Search filters. Absent filters impose no constraint; supplied
/// filters are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Substring match against first name or last name
    /// (case-insensitive) or document (case-sensitive).
    pub term: Option<String>,
    pub kind: Option<UserType>,
    /// Constrains student records only; other types pass through.
    pub course: Option<String>,
    /// Constrains staff records only (substring); other types pass.
    pub role: Option<String>,
}

pub fn run<S: DataStore>(store: &S, query: &UserQuery) -> Vec<User> {
    store
        .load_users()
        .into_iter()
        .filter(|user| matches(user, query))
        .collect()
}

fn matches(user: &User, query: &UserQuery) -> bool {
    if let Some(term) = query.term.as_deref() {
        let term_lower = term.to_lowercase();
        let name_match = user.first_name.to_lowercase().contains(&term_lower);
        let lastname_match = user.last_name.to_lowercase().contains(&term_lower);
        // Documents are numeric, so the raw term is compared as-is.
        let document_match = user.document.contains(term);
        if !(name_match || lastname_match || document_match) {
            return false;
        }
    }

    if let Some(kind) = query.kind {
        if user.kind != kind {
            return false;
        }
    }

    if let Some(course) = query.course.as_deref() {
        if user.kind == UserType::Student {
            let current = user.course.as_deref().unwrap_or_default();
            if current.to_lowercase() != course.to_lowercase() {
                return false;
            }
        }
    }

    if let Some(role) = query.role.as_deref() {
        if user.kind == UserType::Staff {
            let current = user.role.as_deref().unwrap_or_default().to_lowercase();
            if !current.contains(&role.to_lowercase()) {
                return false;
            }
        }
    }

    true
}
