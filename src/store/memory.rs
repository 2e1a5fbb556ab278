use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use super::{ProductStore, product_not_found};
use crate::{
    error::Result,
    models::{NewProduct, Product, ProductId, UpdateProductRequest},
};

/// Process-local store keeping records in insertion order.
#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_update_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn create(&self, product: NewProduct) -> Result<Product> {
        product.validate()?;

        let now = Utc::now();
        let record = Product {
            id: ProductId::generate(),
            name: product.name,
            price: product.price,
            image: product.image,
            created_at: now,
            updated_at: now,
        };

        self.products.write().push(record.clone());
        Ok(record)
    }

    async fn update_by_id(&self, id: &ProductId, changes: UpdateProductRequest) -> Result<Product> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or_else(product_not_found)?;

        product.apply(changes);
        product.updated_at = next_update_time(product.updated_at);

        Ok(product.clone())
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<()> {
        let mut products = self.products.write();
        let position = products
            .iter()
            .position(|product| &product.id == id)
            .ok_or_else(product_not_found)?;

        products.remove(position);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) {
        self.products.write().clear();
        tracing::info!("In-memory product store cleared");
    }
}
