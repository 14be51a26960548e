use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
    prelude::Json,
};
use uuid::Uuid;

use super::{CatalogError, LaptopRepository, filter};
use crate::{
    catalog::LaptopFilter,
    entity::laptops::{ActiveModel, Column, Entity as Laptops, Model as LaptopModel},
    models::{Laptop, LaptopChanges, NewLaptop},
};

/// sea-orm backed catalog.
///
/// Equality and range predicates run in SQL; substring predicates are applied
/// afterwards by [`filter::apply`].
#[derive(Clone)]
pub struct PostgresCatalog {
    orm: DatabaseConnection,
}

impl PostgresCatalog {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}

fn sql_condition(query: &LaptopFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(brand) = filter::active(&query.brand) {
        condition = condition.add(Column::Brand.eq(brand));
    }
    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }
    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }
    if let Some(laptop_condition) = query.condition {
        condition = condition.add(Column::Condition.eq(laptop_condition.as_str()));
    }
    if query.featured_only {
        condition = condition.add(Column::Featured.eq(true));
    }
    if query.new_arrival_only {
        condition = condition.add(Column::NewArrival.eq(true));
    }
    condition
}

#[async_trait]
impl LaptopRepository for PostgresCatalog {
    async fn list(&self, query: &LaptopFilter) -> Result<Vec<Laptop>, CatalogError> {
        let laptops = Laptops::find()
            .filter(sql_condition(query))
            .order_by_desc(Column::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(laptop_from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(filter::apply(&laptops, query))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Laptop>, CatalogError> {
        Laptops::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(laptop_from_entity)
            .transpose()
    }

    async fn insert(&self, laptop: NewLaptop) -> Result<Laptop, CatalogError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(laptop.name),
            brand: Set(laptop.brand),
            ram: Set(laptop.ram),
            processor: Set(laptop.processor),
            storage: Set(laptop.storage),
            graphics: Set(laptop.graphics),
            display: Set(laptop.display),
            price: Set(laptop.price),
            condition: Set(laptop.condition.as_str().to_string()),
            stock: Set(laptop.stock),
            image_url: Set(laptop.image_url),
            images: Set(Json::from(laptop.images)),
            specs: Set(laptop.specs),
            description: Set(laptop.description),
            data_ai_hint: Set(laptop.data_ai_hint),
            featured: Set(laptop.featured),
            new_arrival: Set(laptop.new_arrival),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let model = active.insert(&self.orm).await?;
        laptop_from_entity(model)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: LaptopChanges,
    ) -> Result<Option<Laptop>, CatalogError> {
        let Some(existing) = Laptops::find_by_id(id).one(&self.orm).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(brand) = changes.brand {
            active.brand = Set(brand);
        }
        if let Some(ram) = changes.ram {
            active.ram = Set(ram);
        }
        if let Some(processor) = changes.processor {
            active.processor = Set(processor);
        }
        if let Some(storage) = changes.storage {
            active.storage = Set(storage);
        }
        if let Some(graphics) = changes.graphics {
            active.graphics = Set(graphics);
        }
        if let Some(display) = changes.display {
            active.display = Set(display);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(condition) = changes.condition {
            active.condition = Set(condition.as_str().to_string());
        }
        if let Some(stock) = changes.stock {
            active.stock = Set(stock);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(images) = changes.images {
            active.images = Set(Json::from(images));
        }
        if let Some(specs) = changes.specs {
            active.specs = Set(specs);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(hint) = changes.data_ai_hint {
            active.data_ai_hint = Set(hint);
        }
        if let Some(featured) = changes.featured {
            active.featured = Set(featured);
        }
        if let Some(new_arrival) = changes.new_arrival {
            active.new_arrival = Set(new_arrival);
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let model = active.update(&self.orm).await?;
        laptop_from_entity(model).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CatalogError> {
        let result = Laptops::delete_by_id(id).exec(&self.orm).await?;
        Ok(result.rows_affected > 0)
    }

    async fn featured(&self, limit: u64) -> Result<Vec<Laptop>, CatalogError> {
        Laptops::find()
            .filter(Column::Featured.eq(true))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(laptop_from_entity)
            .collect()
    }

    async fn new_arrivals(&self, limit: u64) -> Result<Vec<Laptop>, CatalogError> {
        Laptops::find()
            .filter(Column::NewArrival.eq(true))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(laptop_from_entity)
            .collect()
    }

    async fn brands(&self) -> Result<Vec<String>, CatalogError> {
        let names = Laptops::find()
            .select_only()
            .column(Column::Brand)
            .distinct()
            .order_by_asc(Column::Brand)
            .into_tuple::<String>()
            .all(&self.orm)
            .await?;
        Ok(names)
    }
}

fn laptop_from_entity(model: LaptopModel) -> Result<Laptop, CatalogError> {
    let condition = model.condition.parse().map_err(|err: crate::models::UnknownCondition| {
        CatalogError::Corrupt {
            id: model.id,
            reason: err.to_string(),
        }
    })?;
    let images = match model.images {
        Json::Null => Vec::new(),
        value => serde_json::from_value(value).map_err(|err| CatalogError::Corrupt {
            id: model.id,
            reason: format!("images: {err}"),
        })?,
    };

    Ok(Laptop {
        id: model.id,
        name: model.name,
        brand: model.brand,
        ram: model.ram,
        processor: model.processor,
        storage: model.storage,
        graphics: model.graphics,
        display: model.display,
        price: model.price,
        condition,
        stock: model.stock,
        image_url: model.image_url,
        images,
        specs: model.specs,
        description: model.description,
        data_ai_hint: model.data_ai_hint,
        featured: model.featured,
        new_arrival: model.new_arrival,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}
