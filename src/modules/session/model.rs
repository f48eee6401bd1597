use serde::Serialize;
use shepherd_auth::{Access, Role};
use utoipa::ToSchema;

/// The signed-in user and the protected areas their role opens.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub areas: Vec<Access>,
}
