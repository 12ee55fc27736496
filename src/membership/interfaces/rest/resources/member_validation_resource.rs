use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::membership::{
    domain::model::validation::member_form_errors::MemberFormOutcome,
    interfaces::rest::resources::member_form_resource::MemberFormResource,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MemberValidationResource {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
    pub error_count: usize,
    pub error_fields: Vec<String>,
    /// Normalized form; only present when `valid` is true.
    pub sanitized: Option<MemberFormResource>,
}

impl From<MemberFormOutcome> for MemberValidationResource {
    fn from(outcome: MemberFormOutcome) -> Self {
        Self {
            valid: outcome.valid,
            errors: outcome.errors.to_message_map(),
            error_count: outcome.error_count,
            error_fields: outcome
                .error_fields
                .iter()
                .map(|field| field.as_str().to_string())
                .collect(),
            sanitized: outcome.sanitized.map(MemberFormResource::from),
        }
    }
}
