use crate::catalog::{OpenFoodFactsClient, ProductCatalog};
use crate::config::AppConfig;
use crate::store::{InventoryStore, PgStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn InventoryStore>,
    pub catalog: Arc<dyn ProductCatalog>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = PgStore::connect(&config.database_url, config.db_max_connections).await?;

        // Run migrations if present
        if let Err(e) = sqlx::migrate!("./migrations").run(store.pool()).await {
            tracing::warn!(error = %e, "migration failed; continuing with existing schema");
        }

        let catalog = OpenFoodFactsClient::new(&config.catalog)?;

        Ok(Self {
            config,
            store: Arc::new(store) as Arc<dyn InventoryStore>,
            catalog: Arc::new(catalog) as Arc<dyn ProductCatalog>,
        })
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn InventoryStore>,
        catalog: Arc<dyn ProductCatalog>,
    ) -> Self {
        Self {
            config,
            store,
            catalog,
        }
    }
}
