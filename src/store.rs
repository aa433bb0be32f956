use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::inventory::{
    self,
    repo_types::{InventoryItem, NewInventoryItem},
};
use crate::products::{
    self,
    repo_types::{NewProduct, Product},
};

/// Everything the inventory core needs from persistence.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn find_product(&self, barcode: &str) -> anyhow::Result<Option<Product>>;

    /// Stores `product`, or returns the product already stored under its
    /// barcode. Never creates a second product for one barcode.
    async fn insert_product(&self, product: NewProduct) -> anyhow::Result<Product>;

    async fn insert_item(&self, item: NewInventoryItem) -> anyhow::Result<InventoryItem>;

    async fn list_items(&self, limit: Option<i64>, offset: i64)
        -> anyhow::Result<Vec<InventoryItem>>;
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connect to database")?;
        Ok(Self { db })
    }

    pub fn pool(&self) -> &PgPool {
        &self.db
    }
}

#[async_trait]
impl InventoryStore for PgStore {
    async fn find_product(&self, barcode: &str) -> anyhow::Result<Option<Product>> {
        products::repo::find_by_barcode(&self.db, barcode).await
    }

    async fn insert_product(&self, product: NewProduct) -> anyhow::Result<Product> {
        products::repo::insert_or_get(&self.db, &product).await
    }

    async fn insert_item(&self, item: NewInventoryItem) -> anyhow::Result<InventoryItem> {
        inventory::repo::insert(&self.db, item).await
    }

    async fn list_items(
        &self,
        limit: Option<i64>,
        offset: i64,
    ) -> anyhow::Result<Vec<InventoryItem>> {
        inventory::repo::list(&self.db, limit, offset).await
    }
}
