use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallerError {
    /// Accumulated field-level validation failures. Never truncated;
    /// the display form matches the original program's message text.
    #[error("Errores de validación: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Duplicate(String),

    #[error("Usuario con ID {0} no encontrado")]
    UserNotFound(u64),

    #[error("Herramienta con ID {0} no encontrada")]
    ToolNotFound(u64),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TallerError>;
