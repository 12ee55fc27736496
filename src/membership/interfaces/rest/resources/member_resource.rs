use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::membership::domain::model::entities::member::Member;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MemberResource {
    pub id: String,
    pub nombres: String,
    pub apellidos: String,
    #[schema(example = "12.345.678-5")]
    pub rut: String,
    pub email: String,
    pub telefono: Option<String>,
    pub fecha_nacimiento: String,
    pub fecha_ingreso: String,
    pub grado: String,
    pub estado: String,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub profesion: Option<String>,
    pub observaciones: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Member> for MemberResource {
    fn from(member: &Member) -> Self {
        let profile = member.profile();
        Self {
            id: member.id().as_string(),
            nombres: profile.first_names().to_string(),
            apellidos: profile.last_names().to_string(),
            rut: profile.rut().formatted(),
            email: profile.email().to_string(),
            telefono: profile.phone().map(str::to_string),
            fecha_nacimiento: profile.birth_date().format("%Y-%m-%d").to_string(),
            fecha_ingreso: profile.join_date().format("%Y-%m-%d").to_string(),
            grado: profile.grade().as_str().to_string(),
            estado: profile.status().as_str().to_string(),
            direccion: profile.address().map(str::to_string),
            ciudad: profile.city().map(str::to_string),
            profesion: profile.profession().map(str::to_string),
            observaciones: profile.notes().map(str::to_string),
            created_at: member.created_at().to_rfc3339(),
            updated_at: member.updated_at().to_rfc3339(),
        }
    }
}
