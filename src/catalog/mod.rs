pub mod filter;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Laptop, LaptopChanges, NewLaptop};

pub use filter::LaptopFilter;
pub use memory::InMemoryCatalog;
pub use postgres::PostgresCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Corrupt record {id}: {reason}")]
    Corrupt { id: Uuid, reason: String },
}

/// Storage collaborator for the laptop catalog.
///
/// Missing ids come back as `Ok(None)` / `Ok(false)`; only store failures are errors.
#[async_trait]
pub trait LaptopRepository: Send + Sync {
    /// Laptops matching `filter`, newest first.
    async fn list(&self, filter: &LaptopFilter) -> Result<Vec<Laptop>, CatalogError>;
    async fn get(&self, id: Uuid) -> Result<Option<Laptop>, CatalogError>;
    async fn insert(&self, laptop: NewLaptop) -> Result<Laptop, CatalogError>;
    async fn update(&self, id: Uuid, changes: LaptopChanges)
    -> Result<Option<Laptop>, CatalogError>;
    async fn delete(&self, id: Uuid) -> Result<bool, CatalogError>;
    async fn featured(&self, limit: u64) -> Result<Vec<Laptop>, CatalogError>;
    async fn new_arrivals(&self, limit: u64) -> Result<Vec<Laptop>, CatalogError>;
    /// Distinct brand names present in the catalog.
    async fn brands(&self) -> Result<Vec<String>, CatalogError>;
}
