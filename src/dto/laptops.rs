use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Brand, Laptop, LaptopChanges, LaptopCondition, NewLaptop};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLaptopRequest {
    #[validate(length(min = 3, message = "Name must be at least 3 characters."))]
    pub name: String,
    #[validate(custom = "crate::validation::required")]
    pub brand: String,
    #[validate(custom = "crate::validation::required")]
    pub ram: String,
    #[validate(custom = "crate::validation::required")]
    pub processor: String,
    #[validate(custom = "crate::validation::required")]
    pub storage: String,
    #[validate(custom = "crate::validation::required")]
    pub graphics: String,
    #[validate(custom = "crate::validation::required")]
    pub display: String,
    #[validate(range(
        min = 1,
        max = 1000000000,
        message = "Price must be between 1 and 1,000,000,000."
    ))]
    pub price: i64,
    pub condition: LaptopCondition,
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative."))]
    pub stock: i32,
    #[serde(default)]
    #[validate(custom = "crate::validation::image_url")]
    pub image_url: String,
    #[serde(default)]
    #[validate(custom = "crate::validation::gallery_urls")]
    pub images: Vec<String>,
    #[validate(length(min = 10, message = "Specs must be at least 10 characters."))]
    pub specs: String,
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub data_ai_hint: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub new_arrival: bool,
}

/// Blank optional text is stored as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CreateLaptopRequest> for NewLaptop {
    fn from(req: CreateLaptopRequest) -> Self {
        NewLaptop {
            name: req.name,
            brand: req.brand,
            ram: req.ram,
            processor: req.processor,
            storage: req.storage,
            graphics: req.graphics,
            display: req.display,
            price: req.price,
            condition: req.condition,
            stock: req.stock,
            image_url: req.image_url,
            images: req.images,
            specs: req.specs,
            description: non_blank(req.description),
            data_ai_hint: non_blank(req.data_ai_hint),
            featured: req.featured,
            new_arrival: req.new_arrival,
        }
    }
}

/// Only the fields present are validated and written.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateLaptopRequest {
    #[validate(length(min = 3, message = "Name must be at least 3 characters."))]
    pub name: Option<String>,
    #[validate(custom = "crate::validation::required")]
    pub brand: Option<String>,
    #[validate(custom = "crate::validation::required")]
    pub ram: Option<String>,
    #[validate(custom = "crate::validation::required")]
    pub processor: Option<String>,
    #[validate(custom = "crate::validation::required")]
    pub storage: Option<String>,
    #[validate(custom = "crate::validation::required")]
    pub graphics: Option<String>,
    #[validate(custom = "crate::validation::required")]
    pub display: Option<String>,
    #[validate(range(
        min = 1,
        max = 1000000000,
        message = "Price must be between 1 and 1,000,000,000."
    ))]
    pub price: Option<i64>,
    pub condition: Option<LaptopCondition>,
    #[validate(range(min = 0, message = "Stock cannot be negative."))]
    pub stock: Option<i32>,
    #[validate(custom = "crate::validation::image_url")]
    pub image_url: Option<String>,
    #[validate(custom = "crate::validation::gallery_urls")]
    pub images: Option<Vec<String>>,
    #[validate(length(min = 10, message = "Specs must be at least 10 characters."))]
    pub specs: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub data_ai_hint: Option<String>,
    pub featured: Option<bool>,
    pub new_arrival: Option<bool>,
}

impl From<UpdateLaptopRequest> for LaptopChanges {
    fn from(req: UpdateLaptopRequest) -> Self {
        LaptopChanges {
            name: req.name,
            brand: req.brand,
            ram: req.ram,
            processor: req.processor,
            storage: req.storage,
            graphics: req.graphics,
            display: req.display,
            price: req.price,
            condition: req.condition,
            stock: req.stock,
            image_url: req.image_url,
            images: req.images,
            specs: req.specs,
            description: req.description.map(|d| non_blank(Some(d))),
            data_ai_hint: req.data_ai_hint.map(|h| non_blank(Some(h))),
            featured: req.featured,
            new_arrival: req.new_arrival,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct LaptopList {
    #[schema(value_type = Vec<Laptop>)]
    pub items: Vec<Laptop>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct BrandList {
    #[schema(value_type = Vec<Brand>)]
    pub items: Vec<Brand>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SpecSummary {
    pub laptop_id: Uuid,
    pub summary: String,
}
