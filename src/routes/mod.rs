mod health;
mod products;

use axum::{
    Router,
    routing::{get, put},
};

use crate::{AppState, error::AppError};

pub fn create_router() -> Router<AppState> {
    let products = product_routes();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(products.clone())
        .nest("/api", products)
        .method_not_allowed_fallback(route_not_found)
        .fallback(route_not_found)
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .method_not_allowed_fallback(route_not_found)
}

// A known path with an unsupported method is answered like an unknown path.
async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
