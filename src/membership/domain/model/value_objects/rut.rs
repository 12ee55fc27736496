//! Chilean RUT identifiers: modulo-11 check digit, canonical formatting and the
//! `Rut` value object.
//!
//! All free functions are total. Malformed input never panics, it is reported
//! as `false`/`None` or passed through unchanged.

use crate::membership::domain::model::enums::membership_domain_error::MembershipDomainError;

const SEPARATORS: [char; 2] = ['.', '-'];
const MIN_STRIPPED_LENGTH: usize = 8;
const MAX_STRIPPED_LENGTH: usize = 9;

/// Removes group/check separators and whitespace, then upper-cases.
pub fn strip(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !SEPARATORS.contains(c) && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Check character for a purely numeric body, or `None` when the body is empty
/// or contains anything other than ASCII digits.
pub fn compute_check_digit(body: &str) -> Option<char> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Weights cycle 2..=7 starting at the least significant digit.
    let remainder = body
        .bytes()
        .rev()
        .zip((2u32..=7).cycle())
        .fold(0u32, |acc, (digit, weight)| {
            (acc + u32::from(digit - b'0') * weight) % 11
        });

    match remainder {
        0 => Some('0'),
        1 => Some('K'),
        other => char::from_digit(11 - other, 10),
    }
}

pub fn is_valid(identifier: &str) -> bool {
    let stripped = strip(identifier);
    let length = stripped.chars().count();
    if !(MIN_STRIPPED_LENGTH..=MAX_STRIPPED_LENGTH).contains(&length) {
        return false;
    }

    match split_check_character(&stripped) {
        Some((body, check)) => compute_check_digit(body) == Some(check),
        None => false,
    }
}

/// Renders `12345678-5` style input as `12.345.678-5`. Does not validate.
pub fn format(identifier: &str) -> String {
    let stripped = strip(identifier);
    if stripped.chars().count() < 2 {
        return identifier.to_string();
    }

    let Some((body, check)) = split_check_character(&stripped) else {
        return identifier.to_string();
    };

    let digits: Vec<char> = body.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    format!("{grouped}-{check}")
}

fn split_check_character(stripped: &str) -> Option<(&str, char)> {
    let check = stripped.chars().last()?;
    Some((&stripped[..stripped.len() - check.len_utf8()], check))
}

/// A RUT whose check character matches its body. Holds the stripped form.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rut(String);

impl Rut {
    pub fn new(value: String) -> Result<Self, MembershipDomainError> {
        if !is_valid(&value) {
            return Err(MembershipDomainError::InvalidRut);
        }
        Ok(Self(strip(&value)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        format(&self.0)
    }
}
