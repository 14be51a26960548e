use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{CatalogError, LaptopRepository, filter};
use crate::{
    catalog::LaptopFilter,
    models::{Laptop, LaptopChanges, NewLaptop},
};

/// Catalog held in process memory. Backs tests and local demos.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    laptops: RwLock<Vec<Laptop>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_laptops(laptops: Vec<Laptop>) -> Self {
        Self {
            laptops: RwLock::new(laptops),
        }
    }

    fn newest_first(&self) -> Vec<Laptop> {
        let mut all = self.read().clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Laptop>> {
        self.laptops.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Laptop>> {
        self.laptops
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl LaptopRepository for InMemoryCatalog {
    async fn list(&self, filter: &LaptopFilter) -> Result<Vec<Laptop>, CatalogError> {
        Ok(filter::apply(&self.newest_first(), filter))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Laptop>, CatalogError> {
        Ok(self.read().iter().find(|l| l.id == id).cloned())
    }

    async fn insert(&self, laptop: NewLaptop) -> Result<Laptop, CatalogError> {
        let laptop = laptop.into_laptop(Uuid::new_v4(), Utc::now());
        self.write().push(laptop.clone());
        Ok(laptop)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: LaptopChanges,
    ) -> Result<Option<Laptop>, CatalogError> {
        let mut laptops = self.write();
        let Some(laptop) = laptops.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        changes.apply_to(laptop, Utc::now());
        Ok(Some(laptop.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CatalogError> {
        let mut laptops = self.write();
        let before = laptops.len();
        laptops.retain(|l| l.id != id);
        Ok(laptops.len() != before)
    }

    async fn featured(&self, limit: u64) -> Result<Vec<Laptop>, CatalogError> {
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|l| l.featured)
            .take(limit as usize)
            .collect())
    }

    async fn new_arrivals(&self, limit: u64) -> Result<Vec<Laptop>, CatalogError> {
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|l| l.new_arrival)
            .take(limit as usize)
            .collect())
    }

    async fn brands(&self) -> Result<Vec<String>, CatalogError> {
        let mut names: Vec<String> = Vec::new();
        for laptop in self.read().iter() {
            if !names.contains(&laptop.brand) {
                names.push(laptop.brand.clone());
            }
        }
        Ok(names)
    }
}
