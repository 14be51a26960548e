//! WhatsApp order hand-off: customer validation, message text and link.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::{CartLine, lines_total};

lazy_static::lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9\s-]{10,15}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CustomerDetails {
    #[validate(custom = "crate::validation::required")]
    pub name: String,

    #[validate(
        custom = "crate::validation::required",
        regex(path = "PHONE_REGEX", message = "Invalid phone number format.")
    )]
    pub phone: String,

    #[validate(custom = "crate::validation::required")]
    pub address: String,
}

#[derive(Debug, Error)]
#[error("could not open checkout link: {0}")]
pub struct HandOffError(pub String);

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("invalid customer details")]
    InvalidCustomer(#[from] ValidationErrors),

    #[error(transparent)]
    HandOff(#[from] HandOffError),
}

/// Opens the outbound messaging link.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), HandOffError>;
}

/// Keeps the link instead of opening it, so a server can hand it back to the client.
#[derive(Debug, Default)]
pub struct CapturedLink {
    url: Option<String>,
}

impl CapturedLink {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn into_url(self) -> Option<String> {
        self.url
    }
}

impl LinkOpener for CapturedLink {
    fn open(&mut self, url: &str) -> Result<(), HandOffError> {
        self.url = Some(url.to_string());
        Ok(())
    }
}

/// Where orders are sent and how the shop signs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutChannel {
    pub store_name: String,
    pub link_base: String,
    pub phone_number: String,
}

impl Default for CheckoutChannel {
    fn default() -> Self {
        Self {
            store_name: "Lapzen".to_string(),
            link_base: "https://wa.me/".to_string(),
            phone_number: "+923090009022".to_string(),
        }
    }
}

impl CheckoutChannel {
    pub fn message(&self, lines: &[CartLine], customer: &CustomerDetails) -> String {
        let mut message = format!("Order Request from {}\n", self.store_name);
        message.push_str(&format!("Name: {}\n", customer.name));
        message.push_str(&format!("Phone: {}\n", customer.phone));
        message.push_str(&format!("Address: {}\n\n", customer.address));
        message.push_str("Cart Items:\n");
        for (index, line) in lines.iter().enumerate() {
            message.push_str(&format!(
                "{}. {} ({}x) - {} PKR\n",
                index + 1,
                line.laptop.name,
                line.quantity,
                format_pkr(line.laptop.price)
            ));
        }
        message.push_str(&format!("\nTotal: {} PKR", format_pkr(lines_total(lines))));
        message
    }

    pub fn link(&self, message: &str) -> String {
        format!(
            "{}{}?text={}",
            self.link_base,
            self.phone_number,
            urlencoding::encode(message)
        )
    }
}

/// Groups digits in threes: `350000` -> `350,000`.
pub fn format_pkr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
