use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use http::{HeaderValue, Method, header};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    routes,
    store::{self, ProductStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// Connects the configured store and assembles the router around it. The
/// returned state keeps the store handle so the caller can close it.
pub async fn build(config: &AppConfig) -> Result<(Router, AppState)> {
    let store = store::connect(&config.storage).await?;
    let state = AppState::new(store);
    let app = router(config, state.clone())?;

    Ok((app, state))
}

pub fn router(config: &AppConfig, state: AppState) -> Result<Router> {
    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
