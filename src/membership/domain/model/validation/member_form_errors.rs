use std::collections::BTreeMap;

use serde::Serialize;

use crate::membership::domain::model::{
    enums::member_field::MemberField, validation::member_record::MemberRecord,
};

/// Field to message map. A field missing from the map passed validation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MemberFormErrors(BTreeMap<MemberField, String>);

impl MemberFormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field.
    pub fn insert(&mut self, field: MemberField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: MemberField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: MemberField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> Vec<MemberField> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemberField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn to_message_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, message)| (field.as_str().to_string(), message.to_string()))
            .collect()
    }
}

/// Result of validating and sanitizing a member form in one pass.
#[derive(Clone, Debug)]
pub struct MemberFormOutcome {
    pub valid: bool,
    pub errors: MemberFormErrors,
    pub error_count: usize,
    pub error_fields: Vec<MemberField>,
    pub sanitized: Option<MemberRecord>,
}
