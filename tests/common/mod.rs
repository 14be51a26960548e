#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use laptop_storefront::{
    auth::StaticCredentials,
    cart::{CheckoutChannel, CustomerDetails},
    catalog::InMemoryCatalog,
    models::{Laptop, LaptopCondition},
    state::{AppState, SessionSettings},
    summary::{SpecSummarizer, SummaryError},
};
use secrecy::SecretString;
use uuid::Uuid;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password";

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap()
}

pub fn laptop(name: &str, brand: &str, price: i64, stock: i32) -> Laptop {
    Laptop {
        id: Uuid::new_v4(),
        name: name.to_string(),
        brand: brand.to_string(),
        ram: "8GB".to_string(),
        processor: "Intel Core i5".to_string(),
        storage: "256GB SSD".to_string(),
        graphics: "Integrated".to_string(),
        display: "14-inch FHD".to_string(),
        price,
        condition: LaptopCondition::Used,
        stock,
        image_url: String::new(),
        images: Vec::new(),
        specs: format!("{name} specs"),
        description: None,
        data_ai_hint: None,
        featured: false,
        new_arrival: false,
        created_at: at(1),
        updated_at: at(1),
    }
}

pub fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Ali Khan".to_string(),
        phone: "+92 300 1234567".to_string(),
        address: "Lahore".to_string(),
    }
}

/// Echoes the specs back so tests can see what was summarized.
pub struct EchoSummarizer;

#[async_trait]
impl SpecSummarizer for EchoSummarizer {
    async fn summarize(&self, specs: &str) -> Result<String, SummaryError> {
        Ok(format!("Summary: {specs}"))
    }
}

pub fn test_state(laptops: Vec<Laptop>) -> AppState {
    let auth = StaticCredentials::new(
        ADMIN_USERNAME,
        &SecretString::from(ADMIN_PASSWORD.to_string()),
        SecretString::from("test-session-secret".to_string()),
        Duration::hours(1),
    )
    .expect("admin credentials");

    AppState {
        catalog: Arc::new(InMemoryCatalog::with_laptops(laptops)),
        auth: Arc::new(auth),
        summarizer: Arc::new(EchoSummarizer),
        checkout: CheckoutChannel::default(),
        session: SessionSettings::default(),
    }
}
