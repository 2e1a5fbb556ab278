use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductId, UpdateProductRequest},
};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at ASC, id ASC")
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn insert(pool: &PgPool, id: &ProductId, product: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (id, name, price, image)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(id)
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.image)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Merges the supplied fields. `updated_at` always moves forward, even when
/// two updates land within the same clock tick.
pub async fn update(
    pool: &PgPool,
    id: &ProductId,
    changes: &UpdateProductRequest,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products
         SET name = COALESCE($2, name),
             price = COALESCE($3, price),
             image = COALESCE($4, image),
             updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&changes.name)
    .bind(changes.price)
    .bind(&changes.image)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Returns whether a row was removed.
pub async fn delete(pool: &PgPool, id: &ProductId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
