use axum::Json;
use shepherd_auth::Access;
use tracing::instrument;

use super::model::SessionResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::ErrorResponse;

/// Current session
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Signed-in user and accessible areas", body = SessionResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Session"
)]
#[instrument(skip_all, fields(user_id = %auth_user.id()))]
pub async fn get_session(auth_user: AuthUser) -> Json<SessionResponse> {
    let AuthUser(identity) = auth_user;
    Json(SessionResponse {
        areas: Access::areas_for(identity.role),
        id: identity.id,
        email: identity.email,
        role: identity.role,
    })
}
