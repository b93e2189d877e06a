//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors travel
//! as `kernel::error::AppError` through the module routers.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::domain::repository::SessionRepository;
use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use posts::posts_router;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,posts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let auth_store_for_cleanup = PgAuthRepository::new(pool.clone());
    match auth_store_for_cleanup.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Auth session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Auth session cleanup failed, continuing anyway"
            );
        }
    }

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, secret_b64.trim())?;
        if secret_bytes.len() != 32 {
            anyhow::bail!("SESSION_SECRET must decode to exactly 32 bytes");
        }
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            session_secret: secret,
            ..AuthConfig::default()
        }
    };
    let auth_config = Arc::new(auth_config);

    // CORS configuration; cookie-based auth needs credentials allowed
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(pool.clone(), Arc::clone(&auth_config)))
        .nest("/api/posts", posts_router(pool.clone(), Arc::clone(&auth_config)))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
