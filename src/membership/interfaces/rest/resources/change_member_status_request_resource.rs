use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ChangeMemberStatusRequestResource {
    #[validate(length(min = 1, max = 32))]
    pub estado: String,
}
