//! Single-field predicates used by the member form validator.
//!
//! Every predicate takes an optional value and treats an absent or blank value
//! as valid. Whether a field is required is the form validator's call.

use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;

use crate::membership::domain::model::enums::{
    member_grade::MemberGrade, member_status::MemberStatus,
};

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex");
    static ref PERSON_NAME_REGEX: Regex =
        Regex::new(r"^[\p{Latin}\p{M}\s'.\-]+$").expect("valid regex");
    static ref ADDRESS_REGEX: Regex =
        Regex::new(r"^[\p{Latin}\p{M}0-9\s#.,°º'()/\-]+$").expect("valid regex");
    // 8-digit local numbers match both the "mobile without 9 prefix" and the
    // landline pattern; either reading is accepted.
    static ref PHONE_PATTERNS: [Regex; 5] = [
        Regex::new(r"^\+?569[0-9]{8}$").expect("valid regex"),
        Regex::new(r"^\+?56[2-7][0-9]{8}$").expect("valid regex"),
        Regex::new(r"^9[0-9]{8}$").expect("valid regex"),
        Regex::new(r"^[0-9]{8}$").expect("valid regex"),
        Regex::new(r"^[2-7][0-9]{7,8}$").expect("valid regex"),
    ];
}

const PERSON_NAME_MIN_LENGTH: usize = 2;
const ADDRESS_MIN_LENGTH: usize = 5;

/// Trimmed value, or `None` when absent or blank.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn is_valid_email(value: Option<&str>) -> bool {
    present(value).is_none_or(|email| EMAIL_REGEX.is_match(email))
}

pub fn is_valid_phone(value: Option<&str>) -> bool {
    present(value).is_none_or(|phone| matches_phone_pattern(&compact_phone(phone)))
}

pub fn is_valid_person_name(value: Option<&str>) -> bool {
    present(value).is_none_or(|name| {
        name.chars().count() >= PERSON_NAME_MIN_LENGTH && PERSON_NAME_REGEX.is_match(name)
    })
}

pub fn is_valid_address(value: Option<&str>) -> bool {
    present(value).is_none_or(|address| {
        address.chars().count() >= ADDRESS_MIN_LENGTH && ADDRESS_REGEX.is_match(address)
    })
}

/// Trimmed character count within `[min, max]`. With `min == 0` a blank value passes.
pub fn is_length_within(value: Option<&str>, min: usize, max: usize) -> bool {
    match value {
        None => true,
        Some(raw) => {
            let length = raw.trim().chars().count();
            if length == 0 {
                return min == 0;
            }
            (min..=max).contains(&length)
        }
    }
}

pub fn is_member_grade(value: Option<&str>) -> bool {
    present(value).is_none_or(|grade| grade.parse::<MemberGrade>().is_ok())
}

pub fn is_member_status(value: Option<&str>) -> bool {
    present(value).is_none_or(|status| status.parse::<MemberStatus>().is_ok())
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, `DD-MM-YYYY` and `DD/MM/YYYY`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%d-%m-%Y").ok())
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").ok())
}

/// Whole years elapsed between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

pub fn has_minimum_age(birth_date: Option<&str>, minimum_age: u32, today: NaiveDate) -> bool {
    match present(birth_date) {
        None => true,
        Some(raw) => parse_date(raw)
            .is_some_and(|date| i64::from(age_on(date, today)) >= i64::from(minimum_age)),
    }
}

/// Date is on or before `today`.
pub fn is_not_in_future(date: Option<&str>, today: NaiveDate) -> bool {
    match present(date) {
        None => true,
        Some(raw) => parse_date(raw).is_some_and(|date| date <= today),
    }
}

/// `date` is strictly after `other`. Passes when either side is absent.
pub fn is_after(date: Option<&str>, other: Option<&str>) -> bool {
    match (present(date), present(other)) {
        (Some(date), Some(other)) => match (parse_date(date), parse_date(other)) {
            (Some(date), Some(other)) => date > other,
            _ => false,
        },
        _ => true,
    }
}

/// Canonical display form for a phone that matches one of the accepted
/// patterns: `+56 9 XXXX XXXX`, `+56 2 XXXX XXXX`, `+56 AA XXX XXXX` or
/// `XXXX XXXX`. Anything else comes back trimmed.
pub fn format_phone(value: &str) -> String {
    let compact = compact_phone(value);
    if !matches_phone_pattern(&compact) {
        return value.trim().to_string();
    }

    let national = compact
        .strip_prefix("+56")
        .or_else(|| compact.strip_prefix("56").filter(|rest| rest.len() == 9))
        .unwrap_or(&compact);

    // Byte slicing below requires ASCII digits.
    if !national.bytes().all(|b| b.is_ascii_digit()) {
        return value.trim().to_string();
    }

    match national.len() {
        9 if national.starts_with('9') || national.starts_with('2') => format!(
            "+56 {} {} {}",
            &national[..1],
            &national[1..5],
            &national[5..]
        ),
        9 => format!(
            "+56 {} {} {}",
            &national[..2],
            &national[2..5],
            &national[5..]
        ),
        8 => format!("{} {}", &national[..4], &national[4..]),
        _ => value.trim().to_string(),
    }
}

fn compact_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
        .collect()
}

fn matches_phone_pattern(compact: &str) -> bool {
    PHONE_PATTERNS.iter().any(|pattern| pattern.is_match(compact))
}
