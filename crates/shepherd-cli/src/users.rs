use anyhow::{Context, bail};
use shepherd_auth::Role;
use shepherd_core::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Inserts the user and returns its id.
///
/// Fails if the email is already registered; an existing account is never
/// overwritten.
pub async fn create_user(db: &PgPool, user: &NewUser) -> anyhow::Result<Uuid> {
    let hashed_password = hash_password(&user.password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.error))?;

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (first_name, last_name, email, password, role)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&hashed_password)
    .bind(user.role.as_str())
    .fetch_optional(db)
    .await
    .context("Failed to insert user")?;

    match id {
        Some(id) => Ok(id),
        None => bail!("User with email {} already exists", user.email),
    }
}
