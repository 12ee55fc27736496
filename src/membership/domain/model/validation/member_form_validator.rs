//! Member form validation and sanitization.
//!
//! Every field is checked independently and all fields are always evaluated.
//! Each field reports at most one message: the first rule it fails.

use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::membership::domain::model::{
    enums::{member_field::MemberField, member_grade::MemberGrade, member_status::MemberStatus},
    validation::{
        field_validators::{
            format_phone, has_minimum_age, is_after, is_length_within, is_member_grade,
            is_member_status, is_not_in_future, is_valid_address, is_valid_email,
            is_valid_person_name, is_valid_phone, parse_date, present,
        },
        member_form_errors::{MemberFormErrors, MemberFormOutcome},
        member_record::MemberRecord,
    },
    value_objects::rut,
};

pub const MINIMUM_MEMBER_AGE: u32 = 16;
pub const PROFESSION_MIN_LENGTH: usize = 2;
pub const PROFESSION_MAX_LENGTH: usize = 100;
pub const NOTES_MAX_LENGTH: usize = 1000;

const FIRST_NAMES_REQUIRED: &str = "Los nombres son obligatorios";
const FIRST_NAMES_INVALID: &str =
    "Los nombres solo pueden contener letras y deben tener al menos 2 caracteres";
const LAST_NAMES_REQUIRED: &str = "Los apellidos son obligatorios";
const LAST_NAMES_INVALID: &str =
    "Los apellidos solo pueden contener letras y deben tener al menos 2 caracteres";
const RUT_REQUIRED: &str = "El RUT es obligatorio";
const RUT_INVALID: &str = "El RUT no es válido";
const EMAIL_REQUIRED: &str = "El email es obligatorio";
const EMAIL_INVALID: &str = "El formato del email no es válido";
const PHONE_INVALID: &str = "El formato del teléfono no es válido";
const BIRTH_DATE_REQUIRED: &str = "La fecha de nacimiento es obligatoria";
const BIRTH_DATE_INVALID: &str = "La fecha de nacimiento no es válida";
const BIRTH_DATE_FUTURE: &str = "La fecha de nacimiento no puede ser futura";
const BIRTH_DATE_TOO_YOUNG: &str = "El miembro debe tener al menos 16 años";
const JOIN_DATE_REQUIRED: &str = "La fecha de ingreso es obligatoria";
const JOIN_DATE_INVALID: &str = "La fecha de ingreso no es válida";
const JOIN_DATE_FUTURE: &str = "La fecha de ingreso no puede ser futura";
const JOIN_DATE_BEFORE_BIRTH: &str =
    "La fecha de ingreso debe ser posterior a la fecha de nacimiento";
const GRADE_REQUIRED: &str = "El grado es obligatorio";
const GRADE_INVALID: &str = "El grado debe ser aprendiz, compañero o maestro";
const STATUS_REQUIRED: &str = "El estado es obligatorio";
const STATUS_INVALID: &str = "El estado debe ser activo, inactivo o suspendido";
const ADDRESS_INVALID: &str = "La dirección no es válida";
const CITY_INVALID: &str = "La ciudad no es válida";
const PROFESSION_INVALID: &str = "La profesión debe tener entre 2 y 100 caracteres";
const NOTES_INVALID: &str = "Las observaciones no pueden superar los 1000 caracteres";

pub fn validate(record: &MemberRecord) -> MemberFormErrors {
    validate_at(record, today())
}

pub fn validate_at(record: &MemberRecord, today: NaiveDate) -> MemberFormErrors {
    let mut errors = MemberFormErrors::new();

    let checks = [
        (
            MemberField::FirstNames,
            person_name_error(
                record.first_names.as_deref(),
                FIRST_NAMES_REQUIRED,
                FIRST_NAMES_INVALID,
            ),
        ),
        (
            MemberField::LastNames,
            person_name_error(
                record.last_names.as_deref(),
                LAST_NAMES_REQUIRED,
                LAST_NAMES_INVALID,
            ),
        ),
        (MemberField::Rut, rut_error(record.rut.as_deref())),
        (MemberField::Email, email_error(record.email.as_deref())),
        (
            MemberField::Phone,
            (!is_valid_phone(record.phone.as_deref())).then_some(PHONE_INVALID),
        ),
        (
            MemberField::BirthDate,
            birth_date_error(record.birth_date.as_deref(), today),
        ),
        (
            MemberField::JoinDate,
            join_date_error(
                record.join_date.as_deref(),
                record.birth_date.as_deref(),
                today,
            ),
        ),
        (
            MemberField::Grade,
            enum_error(
                record.grade.as_deref(),
                is_member_grade,
                GRADE_REQUIRED,
                GRADE_INVALID,
            ),
        ),
        (
            MemberField::Status,
            enum_error(
                record.status.as_deref(),
                is_member_status,
                STATUS_REQUIRED,
                STATUS_INVALID,
            ),
        ),
        (
            MemberField::Address,
            (!is_valid_address(record.address.as_deref())).then_some(ADDRESS_INVALID),
        ),
        (
            MemberField::City,
            (!is_valid_person_name(record.city.as_deref())).then_some(CITY_INVALID),
        ),
        (
            MemberField::Profession,
            (!is_length_within(
                present(record.profession.as_deref()),
                PROFESSION_MIN_LENGTH,
                PROFESSION_MAX_LENGTH,
            ))
            .then_some(PROFESSION_INVALID),
        ),
        (
            MemberField::Notes,
            (!is_length_within(record.notes.as_deref(), 0, NOTES_MAX_LENGTH))
                .then_some(NOTES_INVALID),
        ),
    ];

    for (field, message) in checks {
        if let Some(message) = message {
            errors.insert(field, message);
        }
    }

    errors
}

/// Normalized copy of `record`. Never validates and never fails; values that
/// cannot be normalized are kept trimmed.
pub fn sanitize(record: &MemberRecord) -> MemberRecord {
    MemberRecord {
        first_names: present(record.first_names.as_deref()).map(collapse_whitespace),
        last_names: present(record.last_names.as_deref()).map(collapse_whitespace),
        rut: present(record.rut.as_deref()).map(rut::format),
        email: present(record.email.as_deref()).map(str::to_lowercase),
        phone: present(record.phone.as_deref()).map(format_phone),
        birth_date: present(record.birth_date.as_deref()).map(sanitize_date),
        join_date: present(record.join_date.as_deref()).map(sanitize_date),
        grade: present(record.grade.as_deref()).map(|grade| {
            MemberGrade::from_str(grade)
                .map(|parsed| parsed.as_str().to_string())
                .unwrap_or_else(|_| grade.to_lowercase())
        }),
        status: present(record.status.as_deref()).map(|status| {
            MemberStatus::from_str(status)
                .map(|parsed| parsed.as_str().to_string())
                .unwrap_or_else(|_| status.to_lowercase())
        }),
        address: present(record.address.as_deref()).map(collapse_whitespace),
        city: present(record.city.as_deref()).map(collapse_whitespace),
        profession: present(record.profession.as_deref()).map(collapse_whitespace),
        notes: present(record.notes.as_deref()).map(str::to_string),
    }
}

pub fn validate_and_sanitize(record: &MemberRecord) -> MemberFormOutcome {
    validate_and_sanitize_at(record, today())
}

pub fn validate_and_sanitize_at(record: &MemberRecord, today: NaiveDate) -> MemberFormOutcome {
    let errors = validate_at(record, today);
    let valid = errors.is_empty();

    MemberFormOutcome {
        valid,
        error_count: errors.len(),
        error_fields: errors.fields(),
        sanitized: valid.then(|| sanitize(record)),
        errors,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn person_name_error(
    value: Option<&str>,
    required: &'static str,
    invalid: &'static str,
) -> Option<&'static str> {
    if present(value).is_none() {
        return Some(required);
    }
    (!is_valid_person_name(value)).then_some(invalid)
}

fn rut_error(value: Option<&str>) -> Option<&'static str> {
    match present(value) {
        None => Some(RUT_REQUIRED),
        Some(identifier) if !rut::is_valid(identifier) => Some(RUT_INVALID),
        Some(_) => None,
    }
}

fn email_error(value: Option<&str>) -> Option<&'static str> {
    if present(value).is_none() {
        return Some(EMAIL_REQUIRED);
    }
    (!is_valid_email(value)).then_some(EMAIL_INVALID)
}

fn birth_date_error(value: Option<&str>, today: NaiveDate) -> Option<&'static str> {
    let raw = match present(value) {
        None => return Some(BIRTH_DATE_REQUIRED),
        Some(raw) => raw,
    };
    if parse_date(raw).is_none() {
        return Some(BIRTH_DATE_INVALID);
    }
    if !is_not_in_future(Some(raw), today) {
        return Some(BIRTH_DATE_FUTURE);
    }
    (!has_minimum_age(Some(raw), MINIMUM_MEMBER_AGE, today)).then_some(BIRTH_DATE_TOO_YOUNG)
}

fn join_date_error(
    value: Option<&str>,
    birth_date: Option<&str>,
    today: NaiveDate,
) -> Option<&'static str> {
    let raw = match present(value) {
        None => return Some(JOIN_DATE_REQUIRED),
        Some(raw) => raw,
    };
    if parse_date(raw).is_none() {
        return Some(JOIN_DATE_INVALID);
    }
    if !is_not_in_future(Some(raw), today) {
        return Some(JOIN_DATE_FUTURE);
    }

    // An unusable birth date is reported on its own field.
    let birth_date = present(birth_date).filter(|birth| parse_date(birth).is_some());
    (birth_date.is_some() && !is_after(Some(raw), birth_date)).then_some(JOIN_DATE_BEFORE_BIRTH)
}

fn enum_error(
    value: Option<&str>,
    is_member: fn(Option<&str>) -> bool,
    required: &'static str,
    invalid: &'static str,
) -> Option<&'static str> {
    if present(value).is_none() {
        return Some(required);
    }
    (!is_member(value)).then_some(invalid)
}

fn sanitize_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
