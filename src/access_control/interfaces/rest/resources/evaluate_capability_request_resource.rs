use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EvaluateCapabilityRequestResource {
    #[validate(length(min = 1, max = 32))]
    pub role: String,

    #[validate(length(min = 1, max = 64))]
    pub capability: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EvaluateCapabilityResponseResource {
    pub allowed: bool,
    pub reason: String,
}
