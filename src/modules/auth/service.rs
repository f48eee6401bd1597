use shepherd_auth::{Identity, Role, TokenCodec};
use shepherd_core::{AppError, verify_password};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::model::{LoginRequest, User};

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and mints a session token.
    ///
    /// Unknown email and wrong password produce the same error.
    #[instrument(skip(db, dto, codec), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        codec: &TokenCodec,
    ) -> Result<(User, String), AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            first_name: String,
            last_name: String,
            email: String,
            password: String,
            role: String,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, first_name, last_name, email, password, role FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        let Some(row) = row else {
            tracing::info!("Login failed: unknown email");
            return Err(AppError::unauthorized("Invalid email or password"));
        };

        if !verify_password(&dto.password, &row.password)? {
            tracing::info!(user_id = %row.id, "Login failed: wrong password");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let role: Role = row.role.parse().map_err(|e| {
            AppError::internal_error(format!("User {} has an invalid stored role: {}", row.id, e))
        })?;

        let identity = Identity::new(row.id.to_string(), row.email.clone(), role);
        let token = codec
            .issue_session(&identity)
            .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))?;

        tracing::info!(user_id = %row.id, role = %role, "Login succeeded");

        let user = User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role,
        };

        Ok((user, token))
    }
}
