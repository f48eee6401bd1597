use std::sync::Arc;

use shepherd_auth::{AccessGuard, RouteTable, TokenCodec};
use shepherd_config::{CorsConfig, JwtConfig, SessionConfig};
use shepherd_db::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub guard: AccessGuard,
    pub session_config: SessionConfig,
    pub cors_config: CorsConfig,
    pub route_table: Arc<RouteTable>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        jwt_config: &JwtConfig,
        session_config: SessionConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let codec = Arc::new(TokenCodec::new(jwt_config));
        let guard = AccessGuard::new(codec, session_config.cookie_name.clone());

        Self {
            db,
            guard,
            session_config,
            cors_config,
            route_table: Arc::new(RouteTable::default()),
        }
    }

    pub fn with_route_table(mut self, route_table: RouteTable) -> Self {
        self.route_table = Arc::new(route_table);
        self
    }

    pub fn codec(&self) -> &TokenCodec {
        self.guard.codec()
    }
}
