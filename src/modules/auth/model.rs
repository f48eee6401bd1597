use serde::{Deserialize, Serialize};
use shepherd_auth::Role;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

// Login request structure
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

// Login response; the session token travels only in the cookie
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
