use std::collections::HashMap;

use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use super::repo_types::{NewProduct, Product, ProductRow, RationRow};
use crate::nutrition::{Nutrition, Ration};

/// Find a live product by barcode, with both rations loaded.
pub async fn find_by_barcode(db: &PgPool, barcode: &str) -> anyhow::Result<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT p.id, p.barcode, p.product_name, p.brand, p.ingredients,
               n.per_100g_id, n.per_serving_id, p.created_at
          FROM products p
          JOIN nutriments n ON n.id = p.nutriments_id
         WHERE p.barcode = $1
           AND p.deleted_at IS NULL
        "#,
    )
    .bind(barcode)
    .fetch_optional(db)
    .await
    .context("select product by barcode")?;

    let Some(row) = row else {
        return Ok(None);
    };
    let rations = load_rations(db, ration_ids([&row])).await?;
    Ok(Some(assemble(row, &rations)))
}

/// Store a product with its nutrition graph, or return the one already
/// stored under the same barcode.
///
/// Rations, nutriments and product go in one transaction. The product insert
/// yields to a concurrent writer through the live-barcode unique index
/// (`deleted_at IS NULL`); the losing transaction is rolled back so no orphan
/// rations remain. A soft-deleted product never blocks a fresh insert.
pub async fn insert_or_get(db: &PgPool, new: &NewProduct) -> anyhow::Result<Product> {
    let mut tx = db.begin().await.context("begin tx")?;

    let per_100g_id = match &new.nutrition.per_100g {
        Some(r) => Some(insert_ration_tx(&mut tx, r).await?),
        None => None,
    };
    let per_serving_id = match &new.nutrition.per_serving {
        Some(r) => Some(insert_ration_tx(&mut tx, r).await?),
        None => None,
    };

    let nutriments_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO nutriments (per_100g_id, per_serving_id)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(per_100g_id)
    .bind(per_serving_id)
    .fetch_one(&mut *tx)
    .await
    .context("insert nutriments")?;

    let inserted = sqlx::query_as::<_, (Uuid, OffsetDateTime)>(
        r#"
        INSERT INTO products (barcode, product_name, brand, ingredients, nutriments_id)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (barcode) WHERE deleted_at IS NULL DO NOTHING
        RETURNING id, created_at
        "#,
    )
    .bind(&new.barcode)
    .bind(&new.product_name)
    .bind(&new.brand)
    .bind(&new.ingredients)
    .bind(nutriments_id)
    .fetch_optional(&mut *tx)
    .await
    .context("insert product")?;

    match inserted {
        Some((id, created_at)) => {
            tx.commit().await.context("commit tx")?;
            Ok(Product {
                id,
                barcode: new.barcode.clone(),
                product_name: new.product_name.clone(),
                brand: new.brand.clone(),
                ingredients: new.ingredients.clone(),
                nutrition: new.nutrition.clone(),
                created_at,
            })
        }
        None => {
            tx.rollback().await.context("rollback tx")?;
            debug!(barcode = %new.barcode, "product already stored, reusing it");
            find_by_barcode(db, &new.barcode)
                .await?
                .with_context(|| format!("product {} vanished after insert conflict", new.barcode))
        }
    }
}

async fn insert_ration_tx(tx: &mut Transaction<'_, Postgres>, r: &Ration) -> anyhow::Result<Uuid> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO rations (energy_kcal, fat, saturated_fat, carbohydrates,
                             sugars, fiber, proteins, salt, sodium)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(r.energy_kcal)
    .bind(r.fat)
    .bind(r.saturated_fat)
    .bind(r.carbohydrates)
    .bind(r.sugars)
    .bind(r.fiber)
    .bind(r.proteins)
    .bind(r.salt)
    .bind(r.sodium)
    .fetch_one(&mut **tx)
    .await
    .context("insert ration")?;
    Ok(id)
}

/// Load live rations by id in a single round trip.
pub async fn load_rations(db: &PgPool, ids: Vec<Uuid>) -> anyhow::Result<HashMap<Uuid, Ration>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = sqlx::query_as::<_, RationRow>(
        r#"
        SELECT id, energy_kcal, fat, saturated_fat, carbohydrates,
               sugars, fiber, proteins, salt, sodium
          FROM rations
         WHERE id = ANY($1)
           AND deleted_at IS NULL
        "#,
    )
    .bind(ids)
    .fetch_all(db)
    .await
    .context("select rations")?;

    Ok(rows.iter().map(|r| (r.id, Ration::from(r))).collect())
}

/// Every ration id referenced by `rows`, deduplicated.
pub fn ration_ids<'a>(rows: impl IntoIterator<Item = &'a ProductRow>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = rows
        .into_iter()
        .flat_map(|r| [r.per_100g_id, r.per_serving_id])
        .flatten()
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

pub fn assemble(row: ProductRow, rations: &HashMap<Uuid, Ration>) -> Product {
    let lookup = |id: Option<Uuid>| id.and_then(|id| rations.get(&id).copied());
    Product {
        id: row.id,
        barcode: row.barcode,
        product_name: row.product_name,
        brand: row.brand,
        ingredients: row.ingredients,
        nutrition: Nutrition {
            per_100g: lookup(row.per_100g_id),
            per_serving: lookup(row.per_serving_id),
        },
        created_at: row.created_at,
    }
}
