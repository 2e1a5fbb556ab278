mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::StorageConfig,
    error::Result,
    models::{NewProduct, Product, ProductId, UpdateProductRequest},
};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Keyed storage of product records.
///
/// Implementations run the required-field check on insert and report an absent
/// record as `AppError::NotFound`. Malformed identifiers never get this far:
/// callers must go through `ProductId::parse` first.
#[async_trait]
pub trait ProductStore: Send + Sync {
    fn backend(&self) -> &'static str;

    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn create(&self, product: NewProduct) -> Result<Product>;

    async fn update_by_id(&self, id: &ProductId, changes: UpdateProductRequest) -> Result<Product>;

    async fn delete_by_id(&self, id: &ProductId) -> Result<()>;

    async fn ping(&self) -> Result<()>;

    async fn close(&self);
}

pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn ProductStore>> {
    let store: Arc<dyn ProductStore> = match config {
        StorageConfig::Postgres(database) => Arc::new(PgProductStore::connect(database).await?),
        StorageConfig::Memory => Arc::new(MemoryProductStore::new()),
    };

    tracing::info!("Product store ready ({})", store.backend());

    Ok(store)
}

pub(crate) fn product_not_found() -> crate::error::AppError {
    crate::error::AppError::NotFound("Product not found".to_string())
}
