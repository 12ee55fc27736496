use serde::{Deserialize, Serialize};

/// Raw member form as typed by a user. Every field is optional here;
/// requiredness is decided by the form validator.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    #[serde(rename = "nombres", default)]
    pub first_names: Option<String>,
    #[serde(rename = "apellidos", default)]
    pub last_names: Option<String>,
    #[serde(default)]
    pub rut: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "fecha_nacimiento", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "fecha_ingreso", default)]
    pub join_date: Option<String>,
    #[serde(rename = "grado", default)]
    pub grade: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "ciudad", default)]
    pub city: Option<String>,
    #[serde(rename = "profesion", default)]
    pub profession: Option<String>,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
}
