//! The interactive menu loops. Each flow prompts for field values,
//! calls the API facade, and renders the outcome; EOF on stdin backs
//! out of the current flow so piped input terminates cleanly.

use super::{print, prompt};
use anyhow::Result;
use tallerapp::api::{TallerApi, ToolFilter, ToolInput, UserInput, UserQuery};
use tallerapp::model::{ToolState, ToolType, UserType};
use tallerapp::store::DataStore;

pub fn main_menu<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    loop {
        println!("\n--- Menú Principal ---");
        println!("1. Gestión de Usuarios");
        println!("2. Gestión de Herramientas y Máquinas");
        println!("3. Gestión de Mantenimientos");
        println!("4. Gestión de Asignaciones / Préstamos");
        println!("0. Salir");

        let Some(choice) = prompt::read_line("Seleccione una opción: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => user_menu(api)?,
            "2" => tool_menu(api)?,
            "3" => println!("Funcionalidad 'Gestión de Mantenimientos' en desarrollo..."),
            "4" => {
                println!("Funcionalidad 'Gestión de Asignaciones / Préstamos' en desarrollo...")
            }
            "0" => {
                println!("Saliendo del programa. ¡Hasta pronto!");
                return Ok(());
            }
            _ => println!("Opción no válida. Intente de nuevo."),
        }
    }
}

fn user_menu<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    loop {
        println!("\n--- Menú de Gestión de Usuarios ---");
        println!("1. Crear Usuario");
        println!("2. Editar Usuario");
        println!("3. Eliminar Usuario");
        println!("4. Listar Usuarios");
        println!("5. Buscar Usuario");
        println!("0. Volver al Menú Principal");

        let Some(choice) = prompt::read_line("Seleccione una opción: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => create_user_flow(api)?,
            "2" => edit_user_flow(api)?,
            "3" => delete_user_flow(api)?,
            "4" => list_users_flow(api),
            "5" => search_users_flow(api)?,
            "0" => return Ok(()),
            _ => println!("Opción no válida. Intente de nuevo."),
        }
    }
}

fn create_user_flow<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    println!("\n--- Crear Nuevo Usuario ---");
    let Some(first_name) = prompt::read_line("Nombre: ")? else {
        return Ok(());
    };
    let Some(last_name) = prompt::read_line("Apellido: ")? else {
        return Ok(());
    };
    let Some(document) = prompt::read_line("Documento/Identificación: ")? else {
        return Ok(());
    };

    let kind = loop {
        println!("Tipos de Usuario disponibles:");
        for kind in UserType::ALL {
            println!("- {kind}");
        }
        let Some(value) =
            prompt::read_line(&format!("Tipo de Usuario ({}): ", UserType::values()))?
        else {
            return Ok(());
        };
        if value.parse::<UserType>().is_ok() {
            break value;
        }
        println!("Tipo de usuario no válido. Por favor, elija uno de la lista.");
    };

    let Some(email) = prompt::read_line("Email (opcional): ")? else {
        return Ok(());
    };

    let mut input = UserInput {
        first_name: Some(first_name),
        last_name: Some(last_name),
        document: Some(document),
        kind: Some(kind.clone()),
        email: Some(email),
        ..Default::default()
    };

    if kind == UserType::Student.as_str() {
        let Some(course) = prompt::read_line("Curso/Grado: ")? else {
            return Ok(());
        };
        let Some(workshops) =
            prompt::read_line("Talleres Inscritos (separados por coma, opcional): ")?
        else {
            return Ok(());
        };
        input.course = Some(course);
        input.workshops = Some(split_list(&workshops));
    } else if kind == UserType::Staff.as_str() {
        let Some(role) = prompt::read_line("Rol/Cargo: ")? else {
            return Ok(());
        };
        let Some(department) = prompt::read_line("Departamento/Área (opcional): ")? else {
            return Ok(());
        };
        input.role = Some(role);
        input.department = Some(department);
    }

    match api.create_user(&input) {
        Ok(result) => print::print_messages(&result.messages),
        Err(e) => print::print_error(&e),
    }
    Ok(())
}

fn edit_user_flow<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    println!("\n--- Editar Usuario ---");
    let Some(raw) = prompt::read_line("Ingrese el ID del usuario a editar: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u64>() else {
        println!("ID no válido. Por favor, ingrese un número.");
        return Ok(());
    };

    let Some(user) = api.user_by_id(id) else {
        println!("Usuario con ID {id} no encontrado.");
        return Ok(());
    };

    println!("\nDatos actuales del usuario:");
    print!("{user}");
    println!("\nIngrese los nuevos datos (deje en blanco para mantener el valor actual):");

    let mut patch = UserInput::default();

    let Some(value) = prompt::read_line(&format!("Nombre ({}): ", user.first_name))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.first_name = Some(value);
    }

    let Some(value) = prompt::read_line(&format!("Apellido ({}): ", user.last_name))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.last_name = Some(value);
    }

    let Some(value) =
        prompt::read_line(&format!("Documento/Identificación ({}): ", user.document))?
    else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.document = Some(value);
    }

    loop {
        let Some(value) = prompt::read_line(&format!(
            "Tipo de Usuario ({}) [{}]: ",
            user.kind,
            UserType::values()
        ))?
        else {
            return Ok(());
        };
        if value.is_empty() {
            break;
        }
        if value.parse::<UserType>().is_ok() {
            patch.kind = Some(value);
            break;
        }
        println!("Tipo de usuario no válido. Por favor, elija uno de la lista.");
    }

    let Some(value) = prompt::read_line(&format!("Email ({}): ", user.email))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.email = Some(value);
    } else if !user.email.is_empty() {
        // Blank over an existing value clears it.
        patch.email = Some(String::new());
    }

    let effective_kind = patch
        .kind
        .clone()
        .unwrap_or_else(|| user.kind.as_str().to_string());

    if effective_kind == UserType::Student.as_str() {
        let current_course = user.course.clone().unwrap_or_default();
        let Some(value) = prompt::read_line(&format!("Curso/Grado ({current_course}): "))? else {
            return Ok(());
        };
        if !value.is_empty() {
            patch.course = Some(value);
        } else if !current_course.is_empty() {
            patch.course = Some(String::new());
        }

        let current_workshops = user.workshops.clone().unwrap_or_default().join(", ");
        let Some(value) = prompt::read_line(&format!(
            "Talleres Inscritos ({current_workshops}) (separados por coma): "
        ))?
        else {
            return Ok(());
        };
        if !value.is_empty() {
            patch.workshops = Some(split_list(&value));
        } else if !current_workshops.is_empty() {
            patch.workshops = Some(Vec::new());
        }
    } else if effective_kind == UserType::Staff.as_str() {
        let current_role = user.role.clone().unwrap_or_default();
        let Some(value) = prompt::read_line(&format!("Rol/Cargo ({current_role}): "))? else {
            return Ok(());
        };
        if !value.is_empty() {
            patch.role = Some(value);
        } else if !current_role.is_empty() {
            patch.role = Some(String::new());
        }

        let current_department = user.department.clone().unwrap_or_default();
        let Some(value) =
            prompt::read_line(&format!("Departamento/Área ({current_department}): "))?
        else {
            return Ok(());
        };
        if !value.is_empty() {
            patch.department = Some(value);
        } else if !current_department.is_empty() {
            patch.department = Some(String::new());
        }
    }

    if patch.is_empty() {
        println!("No se ingresaron datos para actualizar. Edición cancelada.");
        return Ok(());
    }

    match api.update_user(id, &patch) {
        Ok(result) => print::print_messages(&result.messages),
        Err(e) => print::print_error(&e),
    }
    Ok(())
}

fn delete_user_flow<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    println!("\n--- Eliminar Usuario ---");
    let Some(raw) = prompt::read_line("Ingrese el ID del usuario a eliminar: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u64>() else {
        println!("ID no válido. Por favor, ingrese un número.");
        return Ok(());
    };

    let Some(user) = api.user_by_id(id) else {
        println!("Usuario con ID {id} no encontrado.");
        return Ok(());
    };

    println!("Está a punto de eliminar al siguiente usuario:");
    print!("{user}");

    if prompt::confirm("¿Está seguro que desea eliminar este usuario? (s/n): ")? {
        match api.delete_user(id) {
            Ok(result) => print::print_messages(&result.messages),
            Err(e) => print::print_error(&e),
        }
    } else {
        println!("Eliminación de usuario cancelada.");
    }
    Ok(())
}

fn list_users_flow<S: DataStore>(api: &TallerApi<S>) {
    println!("\n--- Listado de Usuarios ---");
    let users = api.list_users();
    if users.is_empty() {
        println!("No hay usuarios registrados en el sistema.");
    } else {
        print::print_users(&users);
    }
}

fn search_users_flow<S: DataStore>(api: &TallerApi<S>) -> Result<()> {
    println!("\n--- Buscar Usuario ---");
    let Some(term) =
        prompt::read_line("Ingrese término de búsqueda (nombre, apellido, documento) o deje en blanco: ")?
    else {
        return Ok(());
    };
    let Some(kind_raw) = prompt::read_line(&format!(
        "Ingrese tipo de usuario ({}) o deje en blanco: ",
        UserType::values()
    ))?
    else {
        return Ok(());
    };
    let Some(course) = prompt::read_line("Ingrese curso (solo para Estudiantes) o deje en blanco: ")?
    else {
        return Ok(());
    };
    let Some(role) = prompt::read_line("Ingrese rol (solo para Personal) o deje en blanco: ")?
    else {
        return Ok(());
    };

    let kind = if kind_raw.is_empty() {
        None
    } else {
        match kind_raw.parse::<UserType>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                println!("Tipo de usuario no válido. Por favor, elija uno de la lista.");
                return Ok(());
            }
        }
    };

    let query = UserQuery {
        term: (!term.is_empty()).then_some(term),
        kind,
        course: (!course.is_empty()).then_some(course),
        role: (!role.is_empty()).then_some(role),
    };

    let found = api.search_users(&query);
    if found.is_empty() {
        println!("No se encontraron usuarios con los criterios de búsqueda especificados.");
    } else {
        println!("\n--- Resultados de la Búsqueda ---");
        print::print_users(&found);
    }
    Ok(())
}

fn tool_menu<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    loop {
        println!("\n--- Menú de Gestión de Herramientas y Máquinas ---");
        println!("1. Crear Herramienta");
        println!("2. Editar Herramienta");
        println!("3. Eliminar Herramienta");
        println!("4. Listar Herramientas");
        println!("5. Buscar Herramientas");
        println!("6. Cambiar Estado de Herramienta");
        println!("7. Ver Herramientas Disponibles");
        println!("0. Volver al Menú Principal");

        let Some(choice) = prompt::read_line("Seleccione una opción: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => create_tool_flow(api)?,
            "2" => edit_tool_flow(api)?,
            "3" => delete_tool_flow(api)?,
            "4" => list_tools_flow(api),
            "5" => search_tools_flow(api)?,
            "6" => change_state_flow(api)?,
            "7" => available_tools_flow(api),
            "0" => {
                println!("Volviendo al Menú Principal...");
                return Ok(());
            }
            _ => println!("Opción no válida. Intente de nuevo."),
        }
    }
}

fn create_tool_flow<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    println!("\n--- Crear Nueva Herramienta ---");
    let Some(name) = prompt::read_line("Nombre: ")? else {
        return Ok(());
    };

    let kind = loop {
        println!("Tipos disponibles:");
        for kind in ToolType::ALL {
            println!("- {kind}");
        }
        let Some(value) = prompt::read_line("Tipo: ")? else {
            return Ok(());
        };
        if value.parse::<ToolType>().is_ok() {
            break value;
        }
        println!("Tipo no válido. Por favor, elija uno de la lista.");
    };

    let Some(brand) = prompt::read_line("Marca: ")? else {
        return Ok(());
    };
    let Some(model) = prompt::read_line("Modelo (opcional): ")? else {
        return Ok(());
    };
    let Some(serial_number) = prompt::read_line("Número de Serie (opcional): ")? else {
        return Ok(());
    };

    let state = loop {
        println!("Estados disponibles:");
        for state in ToolState::ALL {
            println!("- {state}");
        }
        let Some(value) = prompt::read_line("Estado: ")? else {
            return Ok(());
        };
        if value.parse::<ToolState>().is_ok() {
            break value;
        }
        println!("Estado no válido. Por favor, elija uno de la lista.");
    };

    let Some(location) = prompt::read_line("Ubicación: ")? else {
        return Ok(());
    };
    let Some(acquisition_date) = prompt::read_line("Fecha de Adquisición (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let Some(notes) = prompt::read_line("Notas (opcional): ")? else {
        return Ok(());
    };

    let input = ToolInput {
        name: Some(name),
        kind: Some(kind),
        brand: Some(brand),
        model: Some(model),
        serial_number: Some(serial_number),
        state: Some(state),
        location: Some(location),
        acquisition_date: Some(acquisition_date),
        notes: Some(notes),
    };

    match api.create_tool(&input) {
        Ok(result) => print::print_messages(&result.messages),
        Err(e) => print::print_error(&e),
    }
    Ok(())
}

fn edit_tool_flow<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    println!("\n--- Editar Herramienta ---");
    let Some(raw) = prompt::read_line("Ingrese el ID de la herramienta a editar: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u64>() else {
        println!("ID no válido. Por favor, ingrese un número.");
        return Ok(());
    };

    let Some(tool) = api.tool_by_id(id) else {
        println!("Herramienta con ID {id} no encontrada.");
        return Ok(());
    };

    println!("\nDatos actuales de la herramienta:");
    print!("{tool}");
    println!("\nIngrese los nuevos datos (deje en blanco para mantener el valor actual):");

    let mut patch = ToolInput::default();

    let Some(value) = prompt::read_line(&format!("Nombre ({}): ", tool.name))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.name = Some(value);
    }

    loop {
        let Some(value) =
            prompt::read_line(&format!("Tipo ({}) [{}]: ", tool.kind, ToolType::values()))?
        else {
            return Ok(());
        };
        if value.is_empty() {
            break;
        }
        if value.parse::<ToolType>().is_ok() {
            patch.kind = Some(value);
            break;
        }
        println!("Tipo no válido. Por favor, elija uno de la lista.");
    }

    let Some(value) = prompt::read_line(&format!("Marca ({}): ", tool.brand))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.brand = Some(value);
    }

    let Some(value) = prompt::read_line(&format!("Modelo ({}): ", tool.model))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.model = Some(value);
    } else if !tool.model.is_empty() {
        patch.model = Some(String::new());
    }

    let Some(value) = prompt::read_line(&format!("Número de Serie ({}): ", tool.serial_number))?
    else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.serial_number = Some(value);
    } else if !tool.serial_number.is_empty() {
        patch.serial_number = Some(String::new());
    }

    loop {
        let Some(value) =
            prompt::read_line(&format!("Estado ({}) [{}]: ", tool.state, ToolState::values()))?
        else {
            return Ok(());
        };
        if value.is_empty() {
            break;
        }
        if value.parse::<ToolState>().is_ok() {
            patch.state = Some(value);
            break;
        }
        println!("Estado no válido. Por favor, elija uno de la lista.");
    }

    let Some(value) = prompt::read_line(&format!("Ubicación ({}): ", tool.location))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.location = Some(value);
    }

    let Some(value) = prompt::read_line(&format!(
        "Fecha de Adquisición ({}): ",
        tool.acquisition_date
    ))?
    else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.acquisition_date = Some(value);
    }

    let Some(value) = prompt::read_line(&format!("Notas ({}): ", tool.notes))? else {
        return Ok(());
    };
    if !value.is_empty() {
        patch.notes = Some(value);
    } else if !tool.notes.is_empty() {
        patch.notes = Some(String::new());
    }

    if patch.is_empty() {
        println!("No se ingresaron datos para actualizar. Edición cancelada.");
        return Ok(());
    }

    match api.update_tool(id, &patch) {
        Ok(result) => print::print_messages(&result.messages),
        Err(e) => print::print_error(&e),
    }
    Ok(())
}

fn delete_tool_flow<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    println!("\n--- Eliminar Herramienta ---");
    let Some(raw) = prompt::read_line("Ingrese el ID de la herramienta a eliminar: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u64>() else {
        println!("ID no válido. Por favor, ingrese un número.");
        return Ok(());
    };

    let Some(tool) = api.tool_by_id(id) else {
        println!("Herramienta con ID {id} no encontrada.");
        return Ok(());
    };

    println!("Está a punto de eliminar la siguiente herramienta:");
    print!("{tool}");

    if prompt::confirm("¿Está seguro que desea eliminar esta herramienta? (s/n): ")? {
        match api.delete_tool(id) {
            Ok(result) => print::print_messages(&result.messages),
            Err(e) => print::print_error(&e),
        }
    } else {
        println!("Eliminación de herramienta cancelada.");
    }
    Ok(())
}

fn list_tools_flow<S: DataStore>(api: &TallerApi<S>) {
    println!("\n--- Listado de Herramientas ---");
    let tools = api.list_tools();
    if tools.is_empty() {
        println!("No hay herramientas registradas en el sistema.");
    } else {
        print::print_tools(&tools);
    }
}

fn search_tools_flow<S: DataStore>(api: &TallerApi<S>) -> Result<()> {
    println!("\n--- Buscar Herramientas ---");
    let Some(name) = prompt::read_line("Ingrese nombre o deje en blanco: ")? else {
        return Ok(());
    };
    let Some(kind_raw) = prompt::read_line(&format!(
        "Ingrese tipo ({}) o deje en blanco: ",
        ToolType::values()
    ))?
    else {
        return Ok(());
    };
    let Some(state_raw) = prompt::read_line(&format!(
        "Ingrese estado ({}) o deje en blanco: ",
        ToolState::values()
    ))?
    else {
        return Ok(());
    };
    let Some(location) = prompt::read_line("Ingrese ubicación o deje en blanco: ")? else {
        return Ok(());
    };
    let Some(brand) = prompt::read_line("Ingrese marca o deje en blanco: ")? else {
        return Ok(());
    };

    let kind = if kind_raw.is_empty() {
        None
    } else {
        match kind_raw.parse::<ToolType>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                println!("Tipo no válido. Por favor, elija uno de la lista.");
                return Ok(());
            }
        }
    };

    let state = if state_raw.is_empty() {
        None
    } else {
        match state_raw.parse::<ToolState>() {
            Ok(state) => Some(state),
            Err(_) => {
                println!("Estado no válido. Por favor, elija uno de la lista.");
                return Ok(());
            }
        }
    };

    let filter = ToolFilter {
        name: (!name.is_empty()).then_some(name),
        kind,
        state,
        location: (!location.is_empty()).then_some(location),
        brand: (!brand.is_empty()).then_some(brand),
    };

    let found = api.search_tools(&filter);
    if found.is_empty() {
        println!("No se encontraron herramientas con los criterios de búsqueda especificados.");
    } else {
        println!("\n--- Resultados de la Búsqueda ---");
        print::print_tools(&found);
    }
    Ok(())
}

fn change_state_flow<S: DataStore>(api: &mut TallerApi<S>) -> Result<()> {
    println!("\n--- Cambiar Estado de Herramienta ---");
    let Some(raw) = prompt::read_line("Ingrese el ID de la herramienta: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u64>() else {
        println!("ID no válido. Por favor, ingrese un número.");
        return Ok(());
    };

    let Some(tool) = api.tool_by_id(id) else {
        println!("Herramienta con ID {id} no encontrada.");
        return Ok(());
    };

    println!("Estado actual: {}", tool.state);
    println!("Estados disponibles:");
    for state in ToolState::ALL {
        println!("- {state}");
    }

    let Some(new_state) = prompt::read_line("Nuevo estado: ")? else {
        return Ok(());
    };

    match api.update_tool_state(id, &new_state) {
        Ok(result) => print::print_messages(&result.messages),
        Err(e) => print::print_error(&e),
    }
    Ok(())
}

fn available_tools_flow<S: DataStore>(api: &TallerApi<S>) {
    println!("\n--- Herramientas Disponibles ---");
    let tools = api.available_tools();
    if tools.is_empty() {
        println!("No hay herramientas disponibles en este momento.");
    } else {
        print::print_tools(&tools);
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
