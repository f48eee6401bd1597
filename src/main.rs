use dotenvy::dotenv;
use shepherd::logging::init_tracing;
use shepherd::router::init_router;
use shepherd::state::AppState;
use shepherd_config::{CorsConfig, JwtConfig, ServerConfig, SessionConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let _log_guard = init_tracing();

    if let Err(e) = run().await {
        error!(error = %e, "Startup failed");
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Configuration errors (e.g. a missing JWT_SECRET) stop the process here,
    // before anything binds or connects.
    let server_config = ServerConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let session_config = SessionConfig::from_env()?;

    let db = shepherd_db::init_and_migrate(&server_config.database_url).await?;
    let state = AppState::new(db, &jwt_config, session_config, CorsConfig::from_env());
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.addr).await?;
    info!(addr = %server_config.addr, "Server listening");
    info!("Swagger UI at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app).await?;
    Ok(())
}
