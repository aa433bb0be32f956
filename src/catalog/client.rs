use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, instrument};

use super::dto::{CatalogEnvelope, CatalogProduct};
use crate::config::CatalogConfig;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {0} not found in catalog")]
    NotFound(String),

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog returned HTTP {0}")]
    Status(u16),

    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// External product catalog, queried when a barcode is not stored locally.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch_product(&self, barcode: &str) -> Result<CatalogProduct, CatalogError>;
}

/// Open Food Facts `v0` product API.
#[derive(Clone)]
pub struct OpenFoodFactsClient {
    http: Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(cfg: &CatalogConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(cfg.user_agent.clone());
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("build catalog http client")?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn product_url(&self, barcode: &str) -> String {
        format!(
            "{}/api/v0/product/{}.json",
            self.base_url,
            urlencoding::encode(barcode)
        )
    }
}

#[async_trait]
impl ProductCatalog for OpenFoodFactsClient {
    #[instrument(skip(self))]
    async fn fetch_product(&self, barcode: &str) -> Result<CatalogProduct, CatalogError> {
        let url = self.product_url(barcode);
        debug!(%url, "fetching product from catalog");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(barcode.to_string()));
        }
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        let envelope: CatalogEnvelope = serde_json::from_slice(&body)?;
        envelope
            .into_product(barcode)
            .ok_or_else(|| CatalogError::NotFound(barcode.to_string()))
    }
}
