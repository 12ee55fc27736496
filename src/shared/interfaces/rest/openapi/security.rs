use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

pub const ROLE_HEADER_NAME: &str = "x-orpheo-role";
pub const ROLE_SECURITY_SCHEME: &str = "orpheoRole";

/// Documents the role header the front-ends send with every member request.
pub struct RoleHeaderSecurityAddon;

impl Modify for RoleHeaderSecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                ROLE_SECURITY_SCHEME,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ROLE_HEADER_NAME))),
            );
        }
    }
}
