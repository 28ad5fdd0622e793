use axum::{
    extract::State,
    http::{header::CACHE_CONTROL, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub mod auth;
pub mod config;
mod cors;
pub mod error;
mod login;

use auth::RequestVerifier;
use config::Settings;
use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub verifier: Arc<dyn RequestVerifier>,
}

pub fn app(settings: Settings, verifier: impl RequestVerifier + 'static) -> Router {
    let state = AppState {
        settings: Arc::new(settings),
        verifier: Arc::new(verifier),
    };

    Router::new()
        .route("/api/config.json", get(public_config))
        .route("/api/login", post(login::login))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn public_config(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let config = state.settings.public_config().ok_or_else(|| {
        tracing::error!("FIREBASE_API_KEY or FIREBASE_AUTH_DOMAIN is not set");
        ApiError::ConfigurationMissing
    })?;

    Ok((
        [(CACHE_CONTROL, "no-cache, no-store, max-age=0, must-revalidate")],
        Json(config),
    ))
}
