use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ListMembersQueryResource {
    pub grado: Option<String>,
    pub estado: Option<String>,
}
