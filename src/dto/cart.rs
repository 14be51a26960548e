use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    cart::{CartLine, CustomerDetails},
    models::Laptop,
};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CartItemRequest {
    pub laptop_id: Uuid,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartQuoteRequest {
    pub items: Vec<CartItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub items: Vec<CartItemRequest>,
    pub customer: CustomerDetails,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineView {
    pub laptop: Laptop,
    pub quantity: u32,
    pub line_total: i64,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            laptop: line.laptop.clone(),
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// A client cart re-priced against the live catalog.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartLineView>,
    pub total: i64,
    pub item_count: u64,
    /// Requested laptops that no longer exist or are out of stock.
    pub unavailable: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutLink {
    pub url: String,
    pub message: String,
    pub total: i64,
}
