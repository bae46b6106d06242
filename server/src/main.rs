use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, Level};

mod config;
mod layout;
mod locale;

use config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = ServerConfig::from_env()?;

    // CORS setup to allow the dev-server frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let api_routes = Router::new().route("/layout", get(layout::layout));

    let app = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async {}))
        .fallback_service(ServeDir::new(&config.frontend_dist))
        .layer(cors);

    info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
