use serde::Serialize;

/// Fields of a member form, in the order the form validator evaluates them.
///
/// Serialized with the Spanish keys the front-ends send and display.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum MemberField {
    #[serde(rename = "nombres")]
    FirstNames,
    #[serde(rename = "apellidos")]
    LastNames,
    #[serde(rename = "rut")]
    Rut,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "telefono")]
    Phone,
    #[serde(rename = "fecha_nacimiento")]
    BirthDate,
    #[serde(rename = "fecha_ingreso")]
    JoinDate,
    #[serde(rename = "grado")]
    Grade,
    #[serde(rename = "estado")]
    Status,
    #[serde(rename = "direccion")]
    Address,
    #[serde(rename = "ciudad")]
    City,
    #[serde(rename = "profesion")]
    Profession,
    #[serde(rename = "observaciones")]
    Notes,
}

impl MemberField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstNames => "nombres",
            Self::LastNames => "apellidos",
            Self::Rut => "rut",
            Self::Email => "email",
            Self::Phone => "telefono",
            Self::BirthDate => "fecha_nacimiento",
            Self::JoinDate => "fecha_ingreso",
            Self::Grade => "grado",
            Self::Status => "estado",
            Self::Address => "direccion",
            Self::City => "ciudad",
            Self::Profession => "profesion",
            Self::Notes => "observaciones",
        }
    }
}
