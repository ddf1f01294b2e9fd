use super::DataStore;
use crate::error::{Result, TallerError};
use crate::model::{Tool, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const USERS_FILE: &str = "usuarios.json";
const TOOLS_FILE: &str = "herramientas.json";

/// File-backed store: one pretty-printed JSON array per collection under
/// `data_dir`. The directory is created on first save.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(TallerError::Io)?;
        }
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, file_name: &str) -> Vec<T> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "no se pudo leer el archivo de datos");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "archivo de datos corrupto, se trata como vacío");
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, file_name: &str, records: &[T]) -> Result<()> {
        self.ensure_dir()?;

        let path = self.data_dir.join(file_name);
        let content = serde_json::to_string_pretty(records).map_err(TallerError::Serialization)?;

        // Atomic write: the old file survives a crash mid-save.
        let tmp_path = self
            .data_dir
            .join(format!(".{}-{}.tmp", file_name, std::process::id()));
        fs::write(&tmp_path, content).map_err(TallerError::Io)?;
        fs::rename(&tmp_path, &path).map_err(TallerError::Io)?;

        debug!(file = %path.display(), records = records.len(), "colección guardada");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_users(&self) -> Vec<User> {
        self.load_collection(USERS_FILE)
    }

    fn save_users(&mut self, users: &[User]) -> Result<()> {
        self.save_collection(USERS_FILE, users)
    }

    fn load_tools(&self) -> Vec<Tool> {
        self.load_collection(TOOLS_FILE)
    }

    fn save_tools(&mut self, tools: &[Tool]) -> Result<()> {
        self.save_collection(TOOLS_FILE, tools)
    }
}
