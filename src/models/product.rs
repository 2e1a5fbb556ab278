use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn apply(&mut self, changes: UpdateProductRequest) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
    }
}

/// Create payload as it arrives over the wire. Every field is optional so a
/// missing one is answered by the handler instead of the JSON extractor.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CreateProductRequest {
    /// Presence check: empty strings and a zero price count as missing.
    pub fn into_new_product(self) -> Option<NewProduct> {
        let name = self.name.filter(|name| !name.is_empty())?;
        let price = self.price.filter(|price| !price.is_zero())?;
        let image = self.image.filter(|image| !image.is_empty())?;

        Some(NewProduct { name, price, image })
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

impl NewProduct {
    /// Required-field check run by the store on insert. Any string that is
    /// not empty and any price are accepted.
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("image", &self.image)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field)));
    }
    Ok(())
}
