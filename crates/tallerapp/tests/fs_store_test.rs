use chrono::NaiveDate;
use std::fs;
use tallerapp::model::{Tool, ToolState, ToolType, User, UserType};
use tallerapp::store::fs::FileStore;
use tallerapp::store::DataStore;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    (dir, store)
}

fn sample_user(id: u64, document: &str) -> User {
    User {
        id,
        first_name: "Ana".into(),
        last_name: "González".into(),
        document: document.into(),
        kind: UserType::Student,
        email: String::new(),
        course: Some("4to Año".into()),
        workshops: Some(vec!["Carpintería".into()]),
        role: None,
        department: None,
    }
}

fn sample_tool(id: u64) -> Tool {
    Tool {
        id,
        name: "Multímetro Digital".into(),
        kind: ToolType::MeasurementEquipment,
        brand: "Fluke".into(),
        model: "117".into(),
        serial_number: format!("FLK-{id:04}"),
        state: ToolState::Available,
        location: "Laboratorio - Mesa 1".into(),
        acquisition_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        notes: String::new(),
        created_at: NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap(),
    }
}

#[test]
fn test_round_trip_preserves_records_and_order() {
    let (_dir, mut store) = setup();

    let users = vec![
        sample_user(3, "1111111"),
        sample_user(1, "2222222"),
        sample_user(2, "3333333"),
    ];
    store.save_users(&users).unwrap();

    let loaded = store.load_users();
    assert_eq!(loaded.len(), 3);
    // Insertion order round-trips; it is display order, nothing more.
    let ids: Vec<u64> = loaded.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(loaded[0].document, "1111111");
}

#[test]
fn test_missing_file_loads_as_empty() {
    let (_dir, store) = setup();
    assert!(store.load_users().is_empty());
    assert!(store.load_tools().is_empty());
}

#[test]
fn test_corrupt_file_loads_as_empty() {
    let (dir, mut store) = setup();
    store.save_users(&[sample_user(1, "1234567")]).unwrap();

    let users_file = dir.path().join("data").join("usuarios.json");
    fs::write(&users_file, "{ esto no es un array").unwrap();

    assert!(store.load_users().is_empty());
}

#[test]
fn test_save_creates_the_data_directory() {
    let (dir, mut store) = setup();
    assert!(!dir.path().join("data").exists());

    store.save_tools(&[sample_tool(1)]).unwrap();
    assert!(dir.path().join("data").join("herramientas.json").exists());
}

#[test]
fn test_atomic_write_leaves_no_artifacts() {
    let (dir, mut store) = setup();
    store.save_users(&[sample_user(1, "1234567")]).unwrap();
    store.save_users(&[sample_user(1, "1234567")]).unwrap();

    for entry in fs::read_dir(dir.path().join("data")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {name}");
    }
}

#[test]
fn test_collections_are_independent_files() {
    let (dir, mut store) = setup();
    store.save_users(&[sample_user(1, "1234567")]).unwrap();
    store.save_tools(&[sample_tool(1), sample_tool(2)]).unwrap();

    assert_eq!(store.load_users().len(), 1);
    assert_eq!(store.load_tools().len(), 2);
    assert!(dir.path().join("data").join("usuarios.json").exists());
    assert!(dir.path().join("data").join("herramientas.json").exists());
}

#[test]
fn test_wire_format_matches_the_original_files() {
    let (dir, mut store) = setup();
    store.save_users(&[sample_user(1, "87654321")]).unwrap();
    store.save_tools(&[sample_tool(1)]).unwrap();

    let users_raw = fs::read_to_string(dir.path().join("data").join("usuarios.json")).unwrap();
    assert!(users_raw.contains("\"nombre\": \"Ana\""));
    assert!(users_raw.contains("\"tipo_usuario\": \"Estudiante\""));
    assert!(users_raw.contains("\"talleres_inscritos\""));

    let tools_raw =
        fs::read_to_string(dir.path().join("data").join("herramientas.json")).unwrap();
    assert!(tools_raw.contains("\"type\": \"Equipo de Medición\""));
    assert!(tools_raw.contains("\"state\": \"Disponible\""));
    assert!(tools_raw.contains("\"created_at\": \"2024-03-10 09:15:00\""));
}

#[test]
fn test_reopening_the_store_sees_persisted_data() {
    let (dir, mut store) = setup();
    store.save_users(&[sample_user(1, "1234567")]).unwrap();
    drop(store);

    let reopened = FileStore::new(dir.path().join("data"));
    assert_eq!(reopened.load_users().len(), 1);
}
