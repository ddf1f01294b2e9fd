//! Core data types: the two record families (users and tools) and the
//! closed enumerations their fields draw from.
//!
//! Serialized field names are pinned to the original data files: Spanish
//! keys for users (`nombre`, `documento`, ...), English keys for tools
//! (`name`, `state`, ...). Rust-side names are uniformly English; serde
//! renames carry the wire form so existing JSON files keep loading
//! bit-for-bit.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "Estudiante")]
    Student,
    #[serde(rename = "Personal")]
    Staff,
    #[serde(rename = "Administrador")]
    Administrator,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Student, UserType::Staff, UserType::Administrator];

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "Estudiante",
            UserType::Staff => "Personal",
            UserType::Administrator => "Administrador",
        }
    }

    /// Every valid wire value, joined for error messages and prompts.
    pub fn values() -> String {
        join_values(&Self::ALL.map(Self::as_str))
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolState {
    #[serde(rename = "Disponible")]
    Available,
    #[serde(rename = "En Uso")]
    InUse,
    #[serde(rename = "En Mantenimiento")]
    InMaintenance,
    #[serde(rename = "Fuera de Servicio")]
    OutOfService,
}

impl ToolState {
    pub const ALL: [ToolState; 4] = [
        ToolState::Available,
        ToolState::InUse,
        ToolState::InMaintenance,
        ToolState::OutOfService,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolState::Available => "Disponible",
            ToolState::InUse => "En Uso",
            ToolState::InMaintenance => "En Mantenimiento",
            ToolState::OutOfService => "Fuera de Servicio",
        }
    }

    pub fn values() -> String {
        join_values(&Self::ALL.map(Self::as_str))
    }
}

impl fmt::Display for ToolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolType {
    #[serde(rename = "Herramienta Manual")]
    ManualTool,
    #[serde(rename = "Máquina Eléctrica")]
    ElectricMachine,
    #[serde(rename = "Equipo de Medición")]
    MeasurementEquipment,
    #[serde(rename = "Consumible")]
    Consumable,
    #[serde(rename = "Equipo de Seguridad")]
    SafetyEquipment,
}

impl ToolType {
    pub const ALL: [ToolType; 5] = [
        ToolType::ManualTool,
        ToolType::ElectricMachine,
        ToolType::MeasurementEquipment,
        ToolType::Consumable,
        ToolType::SafetyEquipment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolType::ManualTool => "Herramienta Manual",
            ToolType::ElectricMachine => "Máquina Eléctrica",
            ToolType::MeasurementEquipment => "Equipo de Medición",
            ToolType::Consumable => "Consumible",
            ToolType::SafetyEquipment => "Equipo de Seguridad",
        }
    }

    pub fn values() -> String {
        join_values(&Self::ALL.map(Self::as_str))
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceType {
    #[serde(rename = "Preventivo")]
    Preventive,
    #[serde(rename = "Correctivo")]
    Corrective,
}

impl MaintenanceType {
    pub const ALL: [MaintenanceType; 2] = [MaintenanceType::Preventive, MaintenanceType::Corrective];

    pub fn as_str(self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "Preventivo",
            MaintenanceType::Corrective => "Correctivo",
        }
    }

    pub fn values() -> String {
        join_values(&Self::ALL.map(Self::as_str))
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Devuelto OK")]
    ReturnedOk,
    #[serde(rename = "Devuelto con Observaciones")]
    ReturnedWithRemarks,
    #[serde(rename = "Perdido")]
    Lost,
    #[serde(rename = "Dañado")]
    Damaged,
}

impl AssignmentStatus {
    pub const ALL: [AssignmentStatus; 5] = [
        AssignmentStatus::Pending,
        AssignmentStatus::ReturnedOk,
        AssignmentStatus::ReturnedWithRemarks,
        AssignmentStatus::Lost,
        AssignmentStatus::Damaged,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pendiente",
            AssignmentStatus::ReturnedOk => "Devuelto OK",
            AssignmentStatus::ReturnedWithRemarks => "Devuelto con Observaciones",
            AssignmentStatus::Lost => "Perdido",
            AssignmentStatus::Damaged => "Dañado",
        }
    }

    pub fn values() -> String {
        join_values(&Self::ALL.map(Self::as_str))
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

fn join_values(values: &[&'static str]) -> String {
    values.join(", ")
}

/// A registered workshop user.
///
/// The type-conditional fields (`course`/`workshops` for students,
/// `role`/`department` for staff) are only present in JSON for the
/// matching user type; `email` is always written, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "tipo_usuario")]
    pub kind: UserType,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "curso", default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(
        rename = "talleres_inscritos",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub workshops: Option<Vec<String>>,
    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "departamento", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Nombre: {} {}", self.first_name, self.last_name)?;
        writeln!(f, "Documento: {}", self.document)?;
        writeln!(f, "Tipo: {}", self.kind)?;
        if !self.email.is_empty() {
            writeln!(f, "Email: {}", self.email)?;
        }
        match self.kind {
            UserType::Student => {
                writeln!(f, "Curso: {}", self.course.as_deref().unwrap_or("N/A"))?;
                if let Some(workshops) = self.workshops.as_deref() {
                    if !workshops.is_empty() {
                        writeln!(f, "Talleres: {}", workshops.join(", "))?;
                    }
                }
            }
            UserType::Staff => {
                writeln!(f, "Rol: {}", self.role.as_deref().unwrap_or("N/A"))?;
                if let Some(department) = self.department.as_deref() {
                    if !department.is_empty() {
                        writeln!(f, "Departamento: {}", department)?;
                    }
                }
            }
            UserType::Administrator => {}
        }
        Ok(())
    }
}

/// A tool or machine tracked by the workshop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ToolType,
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    pub state: ToolState,
    pub location: String,
    pub acquisition_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "timestamp_format")]
    pub created_at: NaiveDateTime,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Nombre: {}", self.name)?;
        writeln!(f, "Tipo: {}", self.kind)?;
        writeln!(f, "Marca: {}", self.brand)?;
        if !self.model.is_empty() {
            writeln!(f, "Modelo: {}", self.model)?;
        }
        if !self.serial_number.is_empty() {
            writeln!(f, "Nº de Serie: {}", self.serial_number)?;
        }
        writeln!(f, "Estado: {}", self.state)?;
        writeln!(f, "Ubicación: {}", self.location)?;
        writeln!(f, "Fecha de Adquisición: {}", self.acquisition_date)?;
        if !self.notes.is_empty() {
            writeln!(f, "Notas: {}", self.notes)?;
        }
        writeln!(f, "Registrada: {}", self.created_at.format(timestamp_format::FORMAT))?;
        Ok(())
    }
}

/// Serde adapter for the original `created_at` wire format, which is a
/// naive local timestamp without a `T` separator or timezone.
pub(crate) mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
