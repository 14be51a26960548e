//! In-memory narrowing of a laptop list.
//!
//! Every set field is a predicate; predicates are ANDed and an unset or blank
//! field always matches. The output keeps the input order.

use crate::models::{Laptop, LaptopCondition};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaptopFilter {
    /// Case-insensitive substring of name or brand.
    pub query: Option<String>,
    /// Exact brand name.
    pub brand: Option<String>,
    /// Substring of the RAM string, e.g. `16GB`.
    pub ram: Option<String>,
    /// Case-insensitive substring of the processor.
    pub processor: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub condition: Option<LaptopCondition>,
    pub featured_only: bool,
    pub new_arrival_only: bool,
}

pub(crate) fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl LaptopFilter {
    pub fn matches(&self, laptop: &Laptop) -> bool {
        if let Some(query) = active(&self.query) {
            let query = query.to_lowercase();
            if !laptop.name.to_lowercase().contains(&query)
                && !laptop.brand.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        if let Some(brand) = active(&self.brand) {
            if laptop.brand != brand {
                return false;
            }
        }
        if let Some(ram) = active(&self.ram) {
            if !laptop.ram.contains(ram) {
                return false;
            }
        }
        if let Some(processor) = active(&self.processor) {
            if !laptop
                .processor
                .to_lowercase()
                .contains(&processor.to_lowercase())
            {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| laptop.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| laptop.price > max) {
            return false;
        }
        if self.condition.is_some_and(|c| laptop.condition != c) {
            return false;
        }
        if self.featured_only && !laptop.featured {
            return false;
        }
        if self.new_arrival_only && !laptop.new_arrival {
            return false;
        }
        true
    }

    /// Number of predicates that would narrow the list.
    pub fn active_count(&self) -> usize {
        [
            active(&self.query).is_some(),
            active(&self.brand).is_some(),
            active(&self.ram).is_some(),
            active(&self.processor).is_some(),
            self.min_price.is_some() || self.max_price.is_some(),
            self.condition.is_some(),
            self.featured_only,
            self.new_arrival_only,
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

pub fn apply(laptops: &[Laptop], filter: &LaptopFilter) -> Vec<Laptop> {
    laptops
        .iter()
        .filter(|laptop| filter.matches(laptop))
        .cloned()
        .collect()
}
