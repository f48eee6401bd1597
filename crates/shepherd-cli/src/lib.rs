//! # Shepherd CLI
//!
//! Operator commands behind the `shepherd-cli` binary.
//!
//! - [`users`]: create login accounts with a bcrypt-hashed password
//! - [`tokens`]: mint session tokens for poking at gated routes by hand
//!
//! ## Usage
//!
//! ```ignore
//! use shepherd_cli::users::{NewUser, create_user};
//!
//! let id = create_user(&pool, &new_user).await?;
//! ```

pub mod tokens;
pub mod users;
