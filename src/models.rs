use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum LaptopCondition {
    New,
    Used,
    Refurbished,
}

impl LaptopCondition {
    pub const ALL: [LaptopCondition; 3] = [
        LaptopCondition::New,
        LaptopCondition::Used,
        LaptopCondition::Refurbished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LaptopCondition::New => "New",
            LaptopCondition::Used => "Used",
            LaptopCondition::Refurbished => "Refurbished",
        }
    }
}

impl fmt::Display for LaptopCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown laptop condition: {0}")]
pub struct UnknownCondition(pub String);

impl FromStr for LaptopCondition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaptopCondition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// Accepts any casing, in JSON bodies and query strings alike.
impl<'de> Deserialize<'de> for LaptopCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A catalog entry. Prices are whole PKR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Laptop {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub ram: String,
    pub processor: String,
    pub storage: String,
    pub graphics: String,
    pub display: String,
    pub price: i64,
    pub condition: LaptopCondition,
    pub stock: i32,
    pub image_url: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub specs: String,
    pub description: Option<String>,
    pub data_ai_hint: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub new_arrival: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Laptop fields supplied on insert; id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLaptop {
    pub name: String,
    pub brand: String,
    pub ram: String,
    pub processor: String,
    pub storage: String,
    pub graphics: String,
    pub display: String,
    pub price: i64,
    pub condition: LaptopCondition,
    pub stock: i32,
    pub image_url: String,
    pub images: Vec<String>,
    pub specs: String,
    pub description: Option<String>,
    pub data_ai_hint: Option<String>,
    pub featured: bool,
    pub new_arrival: bool,
}

impl NewLaptop {
    pub fn into_laptop(self, id: Uuid, now: DateTime<Utc>) -> Laptop {
        Laptop {
            id,
            name: self.name,
            brand: self.brand,
            ram: self.ram,
            processor: self.processor,
            storage: self.storage,
            graphics: self.graphics,
            display: self.display,
            price: self.price,
            condition: self.condition,
            stock: self.stock,
            image_url: self.image_url,
            images: self.images,
            specs: self.specs,
            description: self.description,
            data_ai_hint: self.data_ai_hint,
            featured: self.featured,
            new_arrival: self.new_arrival,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaptopChanges {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub ram: Option<String>,
    pub processor: Option<String>,
    pub storage: Option<String>,
    pub graphics: Option<String>,
    pub display: Option<String>,
    pub price: Option<i64>,
    pub condition: Option<LaptopCondition>,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub specs: Option<String>,
    /// `Some(None)` clears the stored value.
    pub description: Option<Option<String>>,
    pub data_ai_hint: Option<Option<String>>,
    pub featured: Option<bool>,
    pub new_arrival: Option<bool>,
}

impl LaptopChanges {
    pub fn apply_to(self, laptop: &mut Laptop, now: DateTime<Utc>) {
        if let Some(v) = self.name {
            laptop.name = v;
        }
        if let Some(v) = self.brand {
            laptop.brand = v;
        }
        if let Some(v) = self.ram {
            laptop.ram = v;
        }
        if let Some(v) = self.processor {
            laptop.processor = v;
        }
        if let Some(v) = self.storage {
            laptop.storage = v;
        }
        if let Some(v) = self.graphics {
            laptop.graphics = v;
        }
        if let Some(v) = self.display {
            laptop.display = v;
        }
        if let Some(v) = self.price {
            laptop.price = v;
        }
        if let Some(v) = self.condition {
            laptop.condition = v;
        }
        if let Some(v) = self.stock {
            laptop.stock = v;
        }
        if let Some(v) = self.image_url {
            laptop.image_url = v;
        }
        if let Some(v) = self.images {
            laptop.images = v;
        }
        if let Some(v) = self.specs {
            laptop.specs = v;
        }
        if let Some(v) = self.description {
            laptop.description = v;
        }
        if let Some(v) = self.data_ai_hint {
            laptop.data_ai_hint = v;
        }
        if let Some(v) = self.featured {
            laptop.featured = v;
        }
        if let Some(v) = self.new_arrival {
            laptop.new_arrival = v;
        }
        laptop.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

pub const POPULAR_BRANDS: [&str; 5] = ["Dell", "HP", "Lenovo", "Apple", "Asus"];

impl Brand {
    pub fn list<I, S>(names: I) -> Vec<Brand>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Brand {
                id: index.to_string(),
                name: name.into(),
            })
            .collect()
    }
}
