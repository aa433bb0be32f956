use anyhow::Context;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{InventoryItem, InventoryRow, NewInventoryItem};
use crate::products::repo::{assemble, load_rations, ration_ids};

/// Insert an inventory entry for an already stored product.
pub async fn insert(db: &PgPool, new: NewInventoryItem) -> anyhow::Result<InventoryItem> {
    let (id, created_at) = sqlx::query_as::<_, (Uuid, OffsetDateTime)>(
        r#"
        INSERT INTO inventory_items (product_id, expiration_date, quantity)
        VALUES ($1, $2, $3)
        RETURNING id, created_at
        "#,
    )
    .bind(new.product.id)
    .bind(new.expiration_date)
    .bind(new.quantity)
    .fetch_one(db)
    .await
    .context("insert inventory item")?;

    Ok(InventoryItem {
        id,
        product: new.product,
        expiration_date: new.expiration_date,
        quantity: new.quantity,
        created_at,
    })
}

/// List live inventory entries, oldest first, with product and rations.
/// A `None` limit returns everything after `offset`.
pub async fn list(
    db: &PgPool,
    limit: Option<i64>,
    offset: i64,
) -> anyhow::Result<Vec<InventoryItem>> {
    let rows = sqlx::query_as::<_, InventoryRow>(
        r#"
        SELECT i.id, i.expiration_date, i.quantity, i.created_at,
               p.id AS product_id, p.barcode, p.product_name, p.brand, p.ingredients,
               n.per_100g_id, n.per_serving_id, p.created_at AS product_created_at
          FROM inventory_items i
          JOIN products p   ON p.id = i.product_id AND p.deleted_at IS NULL
          JOIN nutriments n ON n.id = p.nutriments_id
         WHERE i.deleted_at IS NULL
         ORDER BY i.created_at ASC, i.id ASC
         LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
    .context("list inventory items")?;

    let parts: Vec<_> = rows.into_iter().map(InventoryRow::split).collect();
    let rations = load_rations(db, ration_ids(parts.iter().map(|(_, p)| p))).await?;

    Ok(parts
        .into_iter()
        .map(|(item, product)| InventoryItem {
            id: item.id,
            product: assemble(product, &rations),
            expiration_date: item.expiration_date,
            quantity: item.quantity,
            created_at: item.created_at,
        })
        .collect())
}
