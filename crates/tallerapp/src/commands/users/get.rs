use crate::model::User;
use crate::store::DataStore;

pub fn by_id<S: DataStore>(store: &S, id: u64) -> Option<User> {
    store.load_users().into_iter().find(|u| u.id == id)
}

/// Exact match on the trimmed document number.
pub fn by_document<S: DataStore>(store: &S, document: &str) -> Option<User> {
    let document = document.trim();
    store
        .load_users()
        .into_iter()
        .find(|u| u.document.trim() == document)
}

#[cfg(test)]
mod tests {
    use super::super::student_input;
    use super::*;
    use crate::commands::users::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_by_id_and_document() {
        let mut store = InMemoryStore::new();
        create::run(
            &mut store,
            &student_input("Ana", "González", "87654321", "4to Año"),
        )
        .unwrap();

        assert_eq!(by_id(&store, 1).unwrap().first_name, "Ana");
        assert!(by_id(&store, 2).is_none());
        assert_eq!(by_document(&store, " 87654321 ").unwrap().id, 1);
        assert!(by_document(&store, "11111111").is_none());
    }
}
