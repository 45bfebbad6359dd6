//! HomeTrack Backend
//!
//! A REST backend for home-maintenance record keeping: categorized notes,
//! warranty expirations, photo uploads and a maintenance timeline, served
//! from an in-memory store.

mod api;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HomeTrack Backend");
    tracing::info!("Upload directory: {:?}", config.upload_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the in-memory store and seed the stock categories
    let store = Arc::new(Store::new(config.upload_dir.clone()));
    store.seed_default_categories().await;
    tracing::info!("Seeded default categories");

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_upload_bytes = state.config.max_upload_bytes;

    // API routes
    let api_routes = Router::new()
        // Categories
        .route("/categories", get(api::list_categories))
        .route("/categories", post(api::create_category))
        .route("/categories/{id}", get(api::get_category))
        .route("/categories/{id}", put(api::update_category))
        .route("/categories/{id}", delete(api::delete_category))
        // Photos
        .route("/photos", get(api::list_photos))
        .route("/photos", post(api::upload_photo))
        .route("/photos/recent", get(api::recent_photos))
        .route("/photos/{id}", get(api::get_photo))
        .route("/photos/{id}", put(api::update_photo))
        .route("/photos/{id}", delete(api::delete_photo))
        .route("/photos/{id}/file", get(api::get_photo_file))
        // Notes
        .route("/notes", get(api::list_notes))
        .route("/notes", post(api::create_note))
        .route("/notes/recent", get(api::recent_notes))
        .route("/notes/{id}", get(api::get_note))
        .route("/notes/{id}", put(api::update_note))
        .route("/notes/{id}", delete(api::delete_note))
        // Warranties
        .route("/warranties", get(api::list_warranties))
        .route("/warranties", post(api::create_warranty))
        .route("/warranties/upcoming", get(api::upcoming_warranties))
        .route("/warranties/{id}", get(api::get_warranty))
        .route("/warranties/{id}", put(api::update_warranty))
        .route("/warranties/{id}", delete(api::delete_warranty))
        // Maintenance events
        .route("/maintenance-events", get(api::list_events))
        .route("/maintenance-events", post(api::create_event))
        .route("/maintenance-events/recent", get(api::recent_events))
        .route("/maintenance-events/{id}", get(api::get_event))
        .route("/maintenance-events/{id}", put(api::update_event))
        .route("/maintenance-events/{id}", delete(api::delete_event))
        // Aggregates
        .route("/dashboard/summary", get(api::dashboard_summary))
        .route("/export", get(api::export_data))
        // Cap request bodies; multipart uploads are the only large payloads
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
