use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RolePermissionsResource {
    pub role: String,
    pub permissions: Vec<String>,
}
