//! Feature modules. Each one follows the same layout:
//!
//! - `model.rs`: request/response DTOs
//! - `service.rs`: business logic (when there is any)
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router

pub mod auth;
pub mod session;
