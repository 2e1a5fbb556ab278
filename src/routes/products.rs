use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{ApiResponse, CreateProductRequest, Product, ProductId, UpdateProductRequest},
    utils::extractors::{AppJson, AppPath},
};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = state.store.list_all().await?;

    Ok(Json(ApiResponse::data(products)))
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>)> {
    let new_product = payload.into_new_product().ok_or_else(|| {
        AppError::BadRequest("Please provide all required fields".to_string())
    })?;

    let product = state.store.create(new_product).await?;
    tracing::debug!("Created product {}", product.id);

    Ok((StatusCode::CREATED, Json(ApiResponse::data(product))))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> Result<Json<ApiResponse<Product>>> {
    let id = ProductId::parse(&id)?;

    let product = state.store.update_by_id(&id, payload).await?;

    Ok(Json(
        ApiResponse::data(product).with_message("Product updated successfully"),
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<()>>> {
    let id = ProductId::parse(&id)?;

    state.store.delete_by_id(&id).await?;
    tracing::debug!("Deleted product {}", id);

    Ok(Json(ApiResponse::message("Product deleted successfully")))
}
