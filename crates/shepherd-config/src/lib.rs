//! # Shepherd Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: session token signing secret and lifetime
//! - [`session`]: auth cookie attributes and the forbidden-response policy
//! - [`cors`]: allowed browser origins
//! - [`server`]: bind address and database URL
//!
//! Every loader has a `from_env` constructor plus a `from_source` variant that
//! takes a lookup closure, so tests never have to mutate the process
//! environment.
//!
//! # Example
//!
//! ```ignore
//! use shepherd_config::{JwtConfig, SessionConfig};
//!
//! // Missing JWT_SECRET is a startup error, not a runtime one.
//! let jwt_config = JwtConfig::from_env()?;
//! let session_config = SessionConfig::from_env()?;
//! ```

pub mod cors;
pub mod error;
pub mod jwt;
pub mod server;
pub mod session;

pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use session::{ForbiddenStatus, SessionConfig};
