use orpheo_api::membership::domain::model::{
    enums::member_field::MemberField,
    validation::{
        member_form_validator::{sanitize, validate_and_sanitize_at, validate_at},
        member_record::MemberRecord,
    },
};

use crate::support::{today, valid_record};

#[test]
fn valid_record_passes_and_is_sanitized() {
    let outcome = validate_and_sanitize_at(&valid_record(), today());

    assert!(outcome.valid);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.error_count, 0);
    assert!(outcome.error_fields.is_empty());

    let sanitized = outcome.sanitized.expect("sanitized record");
    assert_eq!(sanitized.first_names.as_deref(), Some("Juan Pablo"));
    assert_eq!(sanitized.rut.as_deref(), Some("12.345.678-5"));
    assert_eq!(sanitized.email.as_deref(), Some("juan.gonzalez@example.cl"));
    assert_eq!(sanitized.phone.as_deref(), Some("+56 9 1234 5678"));
    assert_eq!(sanitized.birth_date.as_deref(), Some("1985-04-12"));
    assert_eq!(sanitized.join_date.as_deref(), Some("2015-03-02"));
    assert_eq!(sanitized.grade.as_deref(), Some("maestro"));
    assert_eq!(sanitized.status.as_deref(), Some("activo"));
    assert_eq!(sanitized.notes, None);
}

#[test]
fn minimal_apprentice_record_is_valid() {
    let record = MemberRecord {
        first_names: Some("Juan".to_string()),
        last_names: Some("Pérez".to_string()),
        rut: Some("12345678-5".to_string()),
        email: Some("juan@ex.com".to_string()),
        birth_date: Some("2005-06-15".to_string()),
        join_date: Some("2024-06-15".to_string()),
        grade: Some("aprendiz".to_string()),
        status: Some("activo".to_string()),
        ..MemberRecord::default()
    };

    let outcome = validate_and_sanitize_at(&record, today());

    assert!(outcome.valid);
    let sanitized = outcome.sanitized.expect("sanitized record");
    assert_eq!(sanitized.rut.as_deref(), Some("12.345.678-5"));
    assert_eq!(sanitized.email.as_deref(), Some("juan@ex.com"));
    assert_eq!(sanitized.birth_date.as_deref(), Some("2005-06-15"));
    assert_eq!(sanitized.phone, None);
}

#[test]
fn wrong_check_digit_is_reported_on_rut_only() {
    let record = MemberRecord {
        rut: Some("12.345.678-9".to_string()),
        ..valid_record()
    };

    let outcome = validate_and_sanitize_at(&record, today());

    assert!(!outcome.valid);
    assert_eq!(outcome.errors.get(MemberField::Rut), Some("El RUT no es válido"));
    assert_eq!(outcome.error_fields, vec![MemberField::Rut]);
    assert!(outcome.sanitized.is_none());
}

#[test]
fn empty_record_reports_every_required_field_in_order() {
    let errors = validate_at(&MemberRecord::default(), today());

    assert_eq!(
        errors.fields(),
        vec![
            MemberField::FirstNames,
            MemberField::LastNames,
            MemberField::Rut,
            MemberField::Email,
            MemberField::BirthDate,
            MemberField::JoinDate,
            MemberField::Grade,
            MemberField::Status,
        ]
    );
    assert_eq!(errors.get(MemberField::Rut), Some("El RUT es obligatorio"));
    assert_eq!(
        errors.get(MemberField::BirthDate),
        Some("La fecha de nacimiento es obligatoria")
    );
}

#[test]
fn blank_strings_count_as_missing() {
    let record = MemberRecord {
        email: Some("   ".to_string()),
        ..valid_record()
    };

    let errors = validate_at(&record, today());

    assert_eq!(errors.get(MemberField::Email), Some("El email es obligatorio"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn missing_or_empty_phone_is_not_an_error() {
    for phone in [None, Some(String::new())] {
        let record = MemberRecord {
            phone,
            ..valid_record()
        };

        let outcome = validate_and_sanitize_at(&record, today());

        assert!(outcome.valid);
        assert!(!outcome.errors.contains(MemberField::Phone));
        assert_eq!(outcome.sanitized.and_then(|r| r.phone), None);
    }
}

#[test]
fn malformed_phone_is_reported() {
    let record = MemberRecord {
        phone: Some("12-34".to_string()),
        ..valid_record()
    };

    let errors = validate_at(&record, today());

    assert_eq!(
        errors.get(MemberField::Phone),
        Some("El formato del teléfono no es válido")
    );
}

#[test]
fn phone_with_non_ascii_digits_is_reported_and_kept_verbatim() {
    let record = MemberRecord {
        phone: Some("56912३456".to_string()),
        ..valid_record()
    };

    let outcome = validate_and_sanitize_at(&record, today());

    assert!(!outcome.valid);
    assert_eq!(
        outcome.errors.get(MemberField::Phone),
        Some("El formato del teléfono no es válido")
    );
    assert_eq!(sanitize(&record).phone.as_deref(), Some("56912३456"));
}

#[test]
fn member_younger_than_sixteen_is_rejected() {
    let on_birthday = MemberRecord {
        birth_date: Some("2009-06-15".to_string()),
        join_date: Some("2025-06-15".to_string()),
        ..valid_record()
    };
    let one_day_short = MemberRecord {
        birth_date: Some("2009-06-16".to_string()),
        ..on_birthday.clone()
    };

    assert!(validate_at(&on_birthday, today()).is_empty());
    assert_eq!(
        validate_at(&one_day_short, today()).get(MemberField::BirthDate),
        Some("El miembro debe tener al menos 16 años")
    );
}

#[test]
fn future_dates_are_rejected() {
    let record = MemberRecord {
        birth_date: Some("2030-01-01".to_string()),
        join_date: Some("2025-06-16".to_string()),
        ..valid_record()
    };

    let errors = validate_at(&record, today());

    assert_eq!(
        errors.get(MemberField::BirthDate),
        Some("La fecha de nacimiento no puede ser futura")
    );
    assert_eq!(
        errors.get(MemberField::JoinDate),
        Some("La fecha de ingreso no puede ser futura")
    );
}

#[test]
fn join_date_must_follow_birth_date() {
    let same_day = MemberRecord {
        birth_date: Some("1985-04-12".to_string()),
        join_date: Some("1985-04-12".to_string()),
        ..valid_record()
    };
    let next_day = MemberRecord {
        join_date: Some("1985-04-13".to_string()),
        ..same_day.clone()
    };

    assert_eq!(
        validate_at(&same_day, today()).get(MemberField::JoinDate),
        Some("La fecha de ingreso debe ser posterior a la fecha de nacimiento")
    );
    assert!(!validate_at(&next_day, today()).contains(MemberField::JoinDate));
}

#[test]
fn unparseable_birth_date_does_not_cascade_into_join_date() {
    let record = MemberRecord {
        birth_date: Some("31/02/1985".to_string()),
        ..valid_record()
    };

    let errors = validate_at(&record, today());

    assert_eq!(
        errors.get(MemberField::BirthDate),
        Some("La fecha de nacimiento no es válida")
    );
    assert!(!errors.contains(MemberField::JoinDate));
}

#[test]
fn out_of_domain_grade_and_status_are_rejected() {
    let record = MemberRecord {
        grade: Some("gran maestro".to_string()),
        status: Some("retirado".to_string()),
        ..valid_record()
    };

    let errors = validate_at(&record, today());

    assert_eq!(
        errors.get(MemberField::Grade),
        Some("El grado debe ser aprendiz, compañero o maestro")
    );
    assert_eq!(
        errors.get(MemberField::Status),
        Some("El estado debe ser activo, inactivo o suspendido")
    );
}

#[test]
fn optional_text_fields_enforce_their_limits() {
    let record = MemberRecord {
        address: Some("S/N".to_string()),
        city: Some("Ciudad 9".to_string()),
        profession: Some("x".to_string()),
        notes: Some("n".repeat(1001)),
        ..valid_record()
    };

    let errors = validate_at(&record, today());

    assert_eq!(
        errors.fields(),
        vec![
            MemberField::Address,
            MemberField::City,
            MemberField::Profession,
            MemberField::Notes,
        ]
    );
}

#[test]
fn errors_serialize_with_spanish_keys() {
    let record = MemberRecord {
        first_names: None,
        phone: Some("abc".to_string()),
        ..valid_record()
    };

    let map = validate_at(&record, today()).to_message_map();

    assert_eq!(
        map.keys().cloned().collect::<Vec<_>>(),
        vec!["nombres".to_string(), "telefono".to_string()]
    );
}

#[test]
fn fellow_grade_with_tilde_is_normalized() {
    let record = MemberRecord {
        grade: Some(" Compañero ".to_string()),
        ..valid_record()
    };

    let outcome = validate_and_sanitize_at(&record, today());

    assert_eq!(
        outcome.sanitized.and_then(|r| r.grade).as_deref(),
        Some("companero")
    );
}

#[test]
fn sanitize_never_fails_on_invalid_input() {
    let record = MemberRecord {
        first_names: Some("  ".to_string()),
        rut: Some(" no-es-rut ".to_string()),
        phone: Some(" 12 ".to_string()),
        birth_date: Some(" ayer ".to_string()),
        grade: Some("GRAN MAESTRO".to_string()),
        ..MemberRecord::default()
    };

    let sanitized = sanitize(&record);

    assert_eq!(sanitized.first_names, None);
    assert_eq!(sanitized.phone.as_deref(), Some("12"));
    assert_eq!(sanitized.birth_date.as_deref(), Some("ayer"));
    assert_eq!(sanitized.grade.as_deref(), Some("gran maestro"));
    assert!(sanitized.rut.is_some());
}
