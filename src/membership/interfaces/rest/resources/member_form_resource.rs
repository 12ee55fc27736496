use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::membership::domain::model::validation::member_record::MemberRecord;

/// Member form as sent by the web and mobile clients.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct MemberFormResource {
    #[validate(length(max = 200))]
    pub nombres: Option<String>,

    #[validate(length(max = 200))]
    pub apellidos: Option<String>,

    #[validate(length(max = 20))]
    pub rut: Option<String>,

    #[validate(length(max = 254))]
    pub email: Option<String>,

    #[validate(length(max = 30))]
    pub telefono: Option<String>,

    #[validate(length(max = 40))]
    #[schema(example = "1990-05-17")]
    pub fecha_nacimiento: Option<String>,

    #[validate(length(max = 40))]
    #[schema(example = "2015-03-02")]
    pub fecha_ingreso: Option<String>,

    #[validate(length(max = 20))]
    #[schema(example = "aprendiz")]
    pub grado: Option<String>,

    #[validate(length(max = 20))]
    #[schema(example = "activo")]
    pub estado: Option<String>,

    #[validate(length(max = 300))]
    pub direccion: Option<String>,

    #[validate(length(max = 120))]
    pub ciudad: Option<String>,

    #[validate(length(max = 200))]
    pub profesion: Option<String>,

    #[validate(length(max = 4000))]
    pub observaciones: Option<String>,
}

impl From<MemberFormResource> for MemberRecord {
    fn from(resource: MemberFormResource) -> Self {
        Self {
            first_names: resource.nombres,
            last_names: resource.apellidos,
            rut: resource.rut,
            email: resource.email,
            phone: resource.telefono,
            birth_date: resource.fecha_nacimiento,
            join_date: resource.fecha_ingreso,
            grade: resource.grado,
            status: resource.estado,
            address: resource.direccion,
            city: resource.ciudad,
            profession: resource.profesion,
            notes: resource.observaciones,
        }
    }
}

impl From<MemberRecord> for MemberFormResource {
    fn from(record: MemberRecord) -> Self {
        Self {
            nombres: record.first_names,
            apellidos: record.last_names,
            rut: record.rut,
            email: record.email,
            telefono: record.phone,
            fecha_nacimiento: record.birth_date,
            fecha_ingreso: record.join_date,
            grado: record.grade,
            estado: record.status,
            direccion: record.address,
            ciudad: record.city,
            profesion: record.profession,
            observaciones: record.notes,
        }
    }
}
