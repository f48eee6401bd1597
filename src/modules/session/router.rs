use axum::{Router, routing::get};

use super::controller::get_session;
use crate::state::AppState;

pub fn init_session_router() -> Router<AppState> {
    Router::new().route("/", get(get_session))
}
