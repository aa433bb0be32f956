mod client;
mod dto;

pub use client::{CatalogError, OpenFoodFactsClient, ProductCatalog};
pub use dto::{CatalogEnvelope, CatalogProduct};
