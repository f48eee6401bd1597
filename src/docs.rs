use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{ErrorResponse, LoginRequest, LoginResponse, User};
use crate::modules::session::model::SessionResponse;
use shepherd_auth::{Access, Role};
use shepherd_config::session::DEFAULT_COOKIE_NAME;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::session::controller::get_session,
    ),
    components(
        schemas(
            User,
            Role,
            Access,
            LoginRequest,
            LoginResponse,
            SessionResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and logout"),
        (name = "Session", description = "The signed-in user")
    ),
    info(
        title = "Shepherd API",
        version = "0.1.0",
        description = "Church management API with cookie-based session authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    DEFAULT_COOKIE_NAME,
                    "Session cookie set by login. Default name; AUTH_COOKIE_NAME overrides it.",
                ))),
            )
        }
    }
}
