use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{catalog::LaptopFilter, models::LaptopCondition};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

/// Storefront shortcut tags, as linked from the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListingTag {
    Featured,
    New,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LaptopQuery {
    /// Matches name or brand, case-insensitively.
    pub q: Option<String>,
    pub brand: Option<String>,
    pub ram: Option<String>,
    pub processor: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub condition: Option<LaptopCondition>,
    pub filter: Option<ListingTag>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl LaptopQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }

    pub fn to_filter(&self) -> LaptopFilter {
        LaptopFilter {
            query: self.q.clone(),
            brand: self.brand.clone(),
            ram: self.ram.clone(),
            processor: self.processor.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            condition: self.condition,
            featured_only: self.filter == Some(ListingTag::Featured),
            new_arrival_only: self.filter == Some(ListingTag::New),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

impl LimitQuery {
    pub fn normalize(&self) -> u64 {
        self.limit.unwrap_or(4).clamp(1, 24)
    }
}
