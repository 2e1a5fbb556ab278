use async_trait::async_trait;
use sqlx::PgPool;

use super::{ProductStore, product_not_found};
use crate::{
    config::DatabaseConfig,
    database,
    error::Result,
    models::{NewProduct, Product, ProductId, UpdateProductRequest},
    queries::product_queries,
};

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = database::create_pool(config).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        product_queries::find_all(&self.pool).await
    }

    async fn create(&self, product: NewProduct) -> Result<Product> {
        product.validate()?;
        product_queries::insert(&self.pool, &ProductId::generate(), &product).await
    }

    async fn update_by_id(&self, id: &ProductId, changes: UpdateProductRequest) -> Result<Product> {
        product_queries::update(&self.pool, id, &changes)
            .await?
            .ok_or_else(product_not_found)
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<()> {
        if !product_queries::delete(&self.pool, id).await? {
            return Err(product_not_found());
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
