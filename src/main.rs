//! GearGuard maintenance management backend.
//!
//! A layered Axum + SeaORM service: controllers handle HTTP and access
//! control, services hold the maintenance workflow rules, repositories wrap
//! the database. See the module docs on each layer for details.

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod policy;
mod router;
mod service;
mod startup;
mod state;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    startup::check_for_admin(&db, &config).await?;

    // Credentialed CORS for the local frontend; wildcard origins cannot
    // carry session cookies.
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:3000"))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session_layer)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
