use std::str::FromStr;

use chrono::NaiveDate;

use crate::membership::domain::model::{
    enums::{
        member_grade::MemberGrade, member_status::MemberStatus,
        membership_domain_error::MembershipDomainError,
    },
    validation::{field_validators::parse_date, member_record::MemberRecord},
    value_objects::rut::Rut,
};

/// Typed member data. Only built from a record that already passed the form
/// validator, or restored from storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberProfile {
    rut: Rut,
    first_names: String,
    last_names: String,
    email: String,
    phone: Option<String>,
    birth_date: NaiveDate,
    join_date: NaiveDate,
    grade: MemberGrade,
    status: MemberStatus,
    address: Option<String>,
    city: Option<String>,
    profession: Option<String>,
    notes: Option<String>,
}

pub struct MemberProfileParts {
    pub rut: Rut,
    pub first_names: String,
    pub last_names: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: NaiveDate,
    pub join_date: NaiveDate,
    pub grade: MemberGrade,
    pub status: MemberStatus,
    pub address: Option<String>,
    pub city: Option<String>,
    pub profession: Option<String>,
    pub notes: Option<String>,
}

impl MemberProfile {
    pub fn restore(parts: MemberProfileParts) -> Self {
        Self {
            rut: parts.rut,
            first_names: parts.first_names,
            last_names: parts.last_names,
            email: parts.email,
            phone: parts.phone,
            birth_date: parts.birth_date,
            join_date: parts.join_date,
            grade: parts.grade,
            status: parts.status,
            address: parts.address,
            city: parts.city,
            profession: parts.profession,
            notes: parts.notes,
        }
    }

    pub fn from_sanitized(record: MemberRecord) -> Result<Self, MembershipDomainError> {
        let birth_date = required(record.birth_date, "fecha_nacimiento")?;
        let join_date = required(record.join_date, "fecha_ingreso")?;

        Ok(Self::restore(MemberProfileParts {
            rut: Rut::new(required(record.rut, "rut")?)?,
            first_names: required(record.first_names, "nombres")?,
            last_names: required(record.last_names, "apellidos")?,
            email: required(record.email, "email")?,
            phone: record.phone,
            birth_date: parse_date(&birth_date)
                .ok_or(MembershipDomainError::IncompleteMemberProfile("fecha_nacimiento"))?,
            join_date: parse_date(&join_date)
                .ok_or(MembershipDomainError::IncompleteMemberProfile("fecha_ingreso"))?,
            grade: MemberGrade::from_str(&required(record.grade, "grado")?)?,
            status: MemberStatus::from_str(&required(record.status, "estado")?)?,
            address: record.address,
            city: record.city,
            profession: record.profession,
            notes: record.notes,
        }))
    }

    /// Display form: formatted RUT and ISO dates.
    pub fn to_record(&self) -> MemberRecord {
        MemberRecord {
            first_names: Some(self.first_names.clone()),
            last_names: Some(self.last_names.clone()),
            rut: Some(self.rut.formatted()),
            email: Some(self.email.clone()),
            phone: self.phone.clone(),
            birth_date: Some(self.birth_date.format("%Y-%m-%d").to_string()),
            join_date: Some(self.join_date.format("%Y-%m-%d").to_string()),
            grade: Some(self.grade.as_str().to_string()),
            status: Some(self.status.as_str().to_string()),
            address: self.address.clone(),
            city: self.city.clone(),
            profession: self.profession.clone(),
            notes: self.notes.clone(),
        }
    }

    pub(crate) fn set_status(&mut self, status: MemberStatus) {
        self.status = status;
    }

    pub fn rut(&self) -> &Rut {
        &self.rut
    }
    pub fn first_names(&self) -> &str {
        &self.first_names
    }
    pub fn last_names(&self) -> &str {
        &self.last_names
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }
    pub fn grade(&self) -> MemberGrade {
        self.grade
    }
    pub fn status(&self) -> MemberStatus {
        self.status
    }
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
    pub fn profession(&self) -> Option<&str> {
        self.profession.as_deref()
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, MembershipDomainError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(MembershipDomainError::IncompleteMemberProfile(field))
}
