pub mod checkout;
pub mod storage;
pub mod store;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Laptop;

pub use checkout::{
    CapturedLink, CheckoutChannel, CheckoutError, CustomerDetails, HandOffError, LinkOpener,
};
pub use storage::{CART_STORAGE_KEY, CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::CartStore;

/// A laptop snapshot and how many units of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub laptop: Laptop,
    pub quantity: u32,
}

impl CartLine {
    /// Saturates at `i64::MAX` instead of overflowing.
    pub fn line_total(&self) -> i64 {
        self.laptop.price.saturating_mul(i64::from(self.quantity))
    }
}

/// Sum of line totals, saturating at the `i64` bounds.
pub fn lines_total(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .map(CartLine::line_total)
        .fold(0, i64::saturating_add)
}

/// Most units of `laptop` a cart line may hold.
pub(crate) fn stock_limit(laptop: &Laptop) -> u32 {
    u32::try_from(laptop.stock).unwrap_or(0)
}
