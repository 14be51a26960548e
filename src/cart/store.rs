use uuid::Uuid;
use validator::Validate;

use super::{
    CartLine, CheckoutChannel, CheckoutError, CustomerDetails, LinkOpener, lines_total,
    stock_limit, storage::CartStorage,
};
use crate::models::Laptop;

/// Shopping cart with write-through persistence.
///
/// Every line satisfies `0 < quantity <= laptop.stock`. Each mutation is
/// followed by a save; save failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    lines: Vec<CartLine>,
    storage: S,
    channel: CheckoutChannel,
}

impl<S: CartStorage> CartStore<S> {
    /// Restores the cart from `storage`. Unreadable state starts an empty cart.
    pub fn open(storage: S, channel: CheckoutChannel) -> Self {
        let lines = match storage.load() {
            Ok(lines) => lines
                .into_iter()
                .filter_map(|mut line| {
                    line.quantity = line.quantity.min(stock_limit(&line.laptop));
                    (line.quantity > 0).then_some(line)
                })
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "stored cart unreadable, starting empty");
                Vec::new()
            }
        };
        Self {
            lines,
            storage,
            channel,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, laptop_id: Uuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.laptop.id == laptop_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Adds `quantity` units, capped at the laptop's stock. Returns the
    /// resulting quantity of that line (0 when nothing could be added).
    pub fn add_to_cart(&mut self, laptop: &Laptop, quantity: u32) -> u32 {
        let limit = stock_limit(laptop);
        let result = match self.lines.iter().position(|l| l.laptop.id == laptop.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(quantity).min(limit);
                line.laptop = laptop.clone();
                let quantity = line.quantity;
                if quantity == 0 {
                    self.lines.remove(index);
                }
                quantity
            }
            None => {
                let quantity = quantity.min(limit);
                if quantity > 0 {
                    self.lines.push(CartLine {
                        laptop: laptop.clone(),
                        quantity,
                    });
                }
                quantity
            }
        };
        self.persist();
        result
    }

    /// Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, laptop_id: Uuid) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.laptop.id != laptop_id);
        self.persist();
        self.lines.len() != before
    }

    /// Sets the line to `clamp(quantity, 0, stock)`; zero removes it.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, laptop_id: Uuid, quantity: i64) {
        if let Some(index) = self.lines.iter().position(|l| l.laptop.id == laptop_id) {
            let limit = i64::from(stock_limit(&self.lines[index].laptop));
            let clamped = quantity.clamp(0, limit);
            if clamped == 0 {
                self.lines.remove(index);
            } else {
                // clamped is within 1..=u32::MAX here
                self.lines[index].quantity = clamped as u32;
            }
        }
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.persist();
    }

    pub fn cart_total(&self) -> i64 {
        lines_total(&self.lines)
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn checkout_message(&self, customer: &CustomerDetails) -> String {
        self.channel.message(&self.lines, customer)
    }

    pub fn checkout_url(&self, customer: &CustomerDetails) -> String {
        self.channel.link(&self.checkout_message(customer))
    }

    /// Validates the customer and hands the order link to `opener`.
    /// The cart is left as it was whatever the outcome.
    pub fn checkout(
        &self,
        customer: &CustomerDetails,
        opener: &mut impl LinkOpener,
    ) -> Result<(), CheckoutError> {
        customer.validate()?;
        if self.lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let url = self.checkout_url(customer);
        opener.open(&url)?;
        tracing::debug!(items = self.item_count(), total = self.cart_total(), "checkout link opened");
        Ok(())
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.lines) {
            tracing::warn!(error = %err, "cart persistence failed");
        }
    }
}
