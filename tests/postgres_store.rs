//! Runs against the database named by `DB_URL`. Each test returns early when
//! it is unset so the suite stays green without Postgres.

use rust_decimal::Decimal;
use sqlx::PgPool;

use product_catalog::{
    AppError,
    config::DatabaseConfig,
    database,
    models::{NewProduct, ProductId, UpdateProductRequest},
    store::{PgProductStore, ProductStore},
};

const UNUSED_ID: &str = "0000000000000000000000ff";

fn database_config() -> Option<DatabaseConfig> {
    let url = std::env::var("DB_URL").ok()?;
    Some(DatabaseConfig {
        url,
        max_connections: 2,
    })
}

async fn pg_store() -> Option<PgProductStore> {
    let Some(config) = database_config() else {
        eprintln!("DB_URL not set; skipping");
        return None;
    };
    Some(PgProductStore::connect(&config).await.unwrap())
}

fn desk() -> NewProduct {
    NewProduct {
        name: "Desk".to_string(),
        price: Decimal::new(19999, 2),
        image: "http://x/d.png".to_string(),
    }
}

#[tokio::test]
async fn create_then_list_contains_new_record() {
    let Some(store) = pg_store().await else { return };

    let created = store.create(desk()).await.unwrap();
    let listed: Vec<_> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|product| product.id == created.id)
        .collect();

    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created.price, Decimal::new(19999, 2));
    assert_eq!(created.created_at, created.updated_at);

    store.delete_by_id(&created.id).await.unwrap();
    store.close().await;
}

#[tokio::test]
async fn list_keeps_creation_order() {
    let Some(store) = pg_store().await else { return };

    let first = store.create(desk()).await.unwrap();
    let second = store.create(desk()).await.unwrap();

    let ids: Vec<ProductId> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|product| product.id)
        .filter(|id| *id == first.id || *id == second.id)
        .collect();
    assert_eq!(ids, vec![first.id.clone(), second.id.clone()]);

    store.delete_by_id(&first.id).await.unwrap();
    store.delete_by_id(&second.id).await.unwrap();
    store.close().await;
}

#[tokio::test]
async fn update_changes_only_price_and_advances_updated_at() {
    let Some(store) = pg_store().await else { return };
    let created = store.create(desk()).await.unwrap();

    let updated = store
        .update_by_id(
            &created.id,
            UpdateProductRequest {
                price: Some(Decimal::new(14950, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.image, created.image);
    assert_eq!(updated.price, Decimal::new(14950, 2));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let again = store
        .update_by_id(&created.id, UpdateProductRequest::default())
        .await
        .unwrap();
    assert!(again.updated_at > updated.updated_at);
    assert_eq!(again.price, updated.price);

    store.delete_by_id(&created.id).await.unwrap();
    store.close().await;
}

#[tokio::test]
async fn missing_records_are_not_found_and_delete_is_permanent() {
    let Some(store) = pg_store().await else { return };
    let unused = ProductId::parse(UNUSED_ID).unwrap();

    assert!(matches!(
        store
            .update_by_id(&unused, UpdateProductRequest::default())
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.delete_by_id(&unused).await,
        Err(AppError::NotFound(_))
    ));

    let created = store.create(desk()).await.unwrap();
    store.delete_by_id(&created.id).await.unwrap();

    assert!(
        store
            .list_all()
            .await
            .unwrap()
            .iter()
            .all(|product| product.id != created.id)
    );
    assert!(matches!(
        store.delete_by_id(&created.id).await,
        Err(AppError::NotFound(_))
    ));
    store.close().await;
}

#[tokio::test]
async fn table_rejects_non_hex_identifiers() {
    let Some(config) = database_config() else { return };
    let pool: PgPool = database::create_pool(&config).await.unwrap();

    let result =
        sqlx::query("INSERT INTO products (id, name, price, image) VALUES ($1, $2, $3, $4)")
            .bind("not-a-hex-identifier-xyz")
            .bind("Desk")
            .bind(Decimal::ONE)
            .bind("i.png")
            .execute(&pool)
            .await;

    assert!(result.is_err());
    pool.close().await;
}
