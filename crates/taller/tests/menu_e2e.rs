use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn taller(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taller").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path().join("data"));
    cmd
}

#[test]
fn test_create_student_through_the_menu() {
    let dir = TempDir::new().unwrap();

    taller(&dir)
        .write_stdin(concat!(
            "1\n",          // Gestión de Usuarios
            "1\n",          // Crear Usuario
            "Ana\n",        // Nombre
            "González\n",   // Apellido
            "87654321\n",   // Documento
            "Estudiante\n", // Tipo
            "\n",           // Email (opcional)
            "4to Año\n",    // Curso
            "\n",           // Talleres
            "0\n",          // Volver
            "0\n",          // Salir
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Usuario creado exitosamente con ID 1",
        ))
        .stdout(predicate::str::contains("Saliendo del programa"));
}

#[test]
fn test_listing_shows_persisted_users() {
    let dir = TempDir::new().unwrap();

    taller(&dir)
        .write_stdin("1\n1\nAna\nGonzález\n87654321\nEstudiante\n\n4to Año\n\n0\n0\n")
        .assert()
        .success();

    taller(&dir)
        .write_stdin("1\n4\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nombre: Ana González"))
        .stdout(predicate::str::contains("Documento: 87654321"))
        .stdout(predicate::str::contains("Curso: 4to Año"));
}

#[test]
fn test_duplicate_document_is_reported() {
    let dir = TempDir::new().unwrap();

    taller(&dir)
        .write_stdin("1\n1\nAna\nGonzález\n87654321\nEstudiante\n\n4to Año\n\n0\n0\n")
        .assert()
        .success();

    taller(&dir)
        .write_stdin("1\n1\nCarla\nPérez\n87654321\nEstudiante\n\n1er Año\n\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ya existe un usuario con documento 87654321",
        ));
}

#[test]
fn test_tool_state_changes_through_the_menu() {
    let dir = TempDir::new().unwrap();

    taller(&dir)
        .write_stdin(concat!(
            "2\n",                    // Gestión de Herramientas
            "1\n",                    // Crear Herramienta
            "Sierra Circular\n",      // Nombre
            "Máquina Eléctrica\n",    // Tipo
            "Makita\n",               // Marca
            "\n",                     // Modelo
            "\n",                     // Número de Serie
            "Disponible\n",           // Estado
            "Taller de Carpintería\n", // Ubicación
            "2023-11-02\n",           // Fecha de Adquisición
            "\n",                     // Notas
            "6\n",                    // Cambiar Estado
            "1\n",
            "En Uso\n",
            "6\n", // Cambiar Estado (valor inválido)
            "1\n",
            "Estado Inexistente\n",
            "0\n",
            "0\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Herramienta creada exitosamente con ID 1",
        ))
        .stdout(predicate::str::contains("Estado actualizado a: En Uso"))
        .stdout(predicate::str::contains("Estado debe ser uno de:"));
}

#[test]
fn test_available_listing_excludes_tools_in_use() {
    let dir = TempDir::new().unwrap();

    taller(&dir)
        .write_stdin(concat!(
            "2\n1\nSierra Circular\nMáquina Eléctrica\nMakita\n\n\nDisponible\n",
            "Taller de Carpintería\n2023-11-02\n\n",
            "6\n1\nEn Uso\n",
            "7\n", // Ver Herramientas Disponibles
            "0\n0\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No hay herramientas disponibles en este momento.",
        ));
}

#[test]
fn test_eof_on_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    taller(&dir).write_stdin("").assert().success();
}
