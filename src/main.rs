//! Rentalin: car-rental booking backend.
//!
//! Layered axum application: `router` → `middleware` → `controller` →
//! `service` → `data` → `entity`, with SeaORM persistence, cookie sessions,
//! and declarative request validation.

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, service::image::ImageStore, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_roles(&db).await?;
    startup::check_for_admin(&db, &config).await?;

    let session = startup::session_layer(&db).await?;
    let images = ImageStore::new(&config.upload_dir)?;

    let app = router::router()
        .with_state(AppState::new(db, images))
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
