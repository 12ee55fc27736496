use orpheo_api::membership::domain::model::{
    enums::membership_domain_error::MembershipDomainError,
    value_objects::rut::{self, Rut},
};

#[test]
fn check_digit_follows_modulo_eleven_weights() {
    assert_eq!(rut::compute_check_digit("12345678"), Some('5'));
    assert_eq!(rut::compute_check_digit("11111111"), Some('1'));
    assert_eq!(rut::compute_check_digit("7654321"), Some('6'));
}

#[test]
fn check_digit_maps_remainders_zero_and_one() {
    assert_eq!(rut::compute_check_digit("14000000"), Some('0'));
    assert_eq!(rut::compute_check_digit("6000000"), Some('K'));
}

#[test]
fn check_digit_rejects_empty_or_non_numeric_bodies() {
    assert_eq!(rut::compute_check_digit(""), None);
    assert_eq!(rut::compute_check_digit("12a45678"), None);
    assert_eq!(rut::compute_check_digit("1234567８"), None);
}

#[test]
fn is_valid_accepts_any_separator_layout() {
    for identifier in ["12345678-5", "12.345.678-5", "123456785", " 12.345.678 - 5 "] {
        assert!(rut::is_valid(identifier), "{identifier} should be valid");
    }
}

#[test]
fn is_valid_accepts_lowercase_k() {
    assert!(rut::is_valid("6.000.000-k"));
    assert!(rut::is_valid("6000000K"));
}

#[test]
fn is_valid_rejects_flipped_check_character() {
    assert!(!rut::is_valid("12345678-4"));
    assert!(!rut::is_valid("12345678-K"));
    assert!(!rut::is_valid("6000000-0"));
}

#[test]
fn is_valid_rejects_bad_lengths_and_garbage() {
    for identifier in ["", "-", "1-9", "1234567", "1234567890-1", "abcdefgh-1", "12.345.67X-5"] {
        assert!(!rut::is_valid(identifier), "{identifier} should be invalid");
    }
}

#[test]
fn strip_is_idempotent_and_uppercases() {
    let stripped = rut::strip("6.000.000-k");
    assert_eq!(stripped, "6000000K");
    assert_eq!(rut::strip(&stripped), stripped);
}

#[test]
fn format_groups_digits_by_thousands() {
    assert_eq!(rut::format(&rut::strip("12345678-5")), "12.345.678-5");
    assert_eq!(rut::format("76543216"), "7.654.321-6");
    assert_eq!(rut::format("6000000-k"), "6.000.000-K");
    assert_eq!(rut::format("12-3"), "12-3");
}

#[test]
fn format_leaves_too_short_input_untouched() {
    assert_eq!(rut::format(""), "");
    assert_eq!(rut::format("7"), "7");
}

#[test]
fn rut_value_object_stores_stripped_form() {
    let rut = Rut::new("12.345.678-5".to_string()).expect("valid rut");

    assert_eq!(rut.value(), "123456785");
    assert_eq!(rut.formatted(), "12.345.678-5");
    assert_eq!(rut, Rut::new("123456785".to_string()).expect("valid rut"));
}

#[test]
fn rut_value_object_rejects_invalid_identifier() {
    assert!(matches!(
        Rut::new("12.345.678-9".to_string()),
        Err(MembershipDomainError::InvalidRut)
    ));
}
