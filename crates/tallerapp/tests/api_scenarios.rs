//! End-to-end scenarios through the API facade against real files.

use tallerapp::api::{TallerApi, ToolInput, UserInput};
use tallerapp::error::TallerError;
use tallerapp::model::ToolState;
use tallerapp::store::fs::FileStore;
use tempfile::TempDir;

fn setup() -> (TempDir, TallerApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let api = TallerApi::new(FileStore::new(dir.path().join("data")));
    (dir, api)
}

fn ana() -> UserInput {
    UserInput {
        first_name: Some("Ana".into()),
        last_name: Some("González".into()),
        document: Some("87654321".into()),
        kind: Some("Estudiante".into()),
        course: Some("4to Año".into()),
        ..Default::default()
    }
}

#[test]
fn test_user_lifecycle() {
    let (_dir, mut api) = setup();

    // Create succeeds and hands out id 1.
    let result = api.create_user(&ana()).unwrap();
    assert_eq!(result.created_id, Some(1));

    // A second user with the same document is rejected.
    let mut duplicate = ana();
    duplicate.first_name = Some("Carla".into());
    let err = api.create_user(&duplicate).unwrap_err();
    match err {
        TallerError::Duplicate(message) => assert!(message.contains("87654321")),
        other => panic!("expected duplicate error, got {other:?}"),
    }
    assert_eq!(api.list_users().len(), 1);

    // Delete, then the id resolves to nothing.
    api.delete_user(1).unwrap();
    assert!(api.user_by_id(1).is_none());
}

#[test]
fn test_tool_state_transitions() {
    let (_dir, mut api) = setup();

    let input = ToolInput {
        name: Some("Sierra Circular".into()),
        kind: Some("Máquina Eléctrica".into()),
        brand: Some("Makita".into()),
        state: Some("Disponible".into()),
        location: Some("Taller de Carpintería".into()),
        acquisition_date: Some("2023-11-02".into()),
        ..Default::default()
    };
    let id = api.create_tool(&input).unwrap().created_id.unwrap();

    api.update_tool_state(id, "En Uso").unwrap();
    assert_eq!(api.tool_by_id(id).unwrap().state, ToolState::InUse);

    // Values outside the closed set are rejected and the record keeps
    // its current state.
    for bogus in ["Estado Inexistente", "Bajo Reparación"] {
        let err = api.update_tool_state(id, bogus).unwrap_err();
        assert!(matches!(err, TallerError::Validation(_)));
        assert_eq!(api.tool_by_id(id).unwrap().state, ToolState::InUse);
    }
}

#[test]
fn test_data_survives_reopening() {
    let dir = TempDir::new().unwrap();

    {
        let mut api = TallerApi::new(FileStore::new(dir.path().join("data")));
        api.create_user(&ana()).unwrap();
    }

    let api = TallerApi::new(FileStore::new(dir.path().join("data")));
    let user = api.user_by_document("87654321").unwrap();
    assert_eq!(user.first_name, "Ana");

    // Ids keep growing past deletions across sessions.
    let mut api = api;
    api.delete_user(1).unwrap();
    let next = api.create_user(&ana()).unwrap();
    assert_eq!(next.created_id, Some(1)); // collection emptied, allocator restarts
}

#[test]
fn test_allocator_never_reuses_a_live_id() {
    let (_dir, mut api) = setup();

    api.create_user(&ana()).unwrap();
    let mut second = ana();
    second.document = Some("11111111".into());
    api.create_user(&second).unwrap();

    // Deleting below the max does not free id 1 for reuse.
    api.delete_user(1).unwrap();
    let mut third = ana();
    third.document = Some("2222222".into());
    let result = api.create_user(&third).unwrap();
    assert_eq!(result.created_id, Some(3));
}
