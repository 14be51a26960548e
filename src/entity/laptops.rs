use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "laptops")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub ram: String,
    pub processor: String,
    pub storage: String,
    pub graphics: String,
    pub display: String,
    pub price: i64,
    pub condition: String,
    pub stock: i32,
    pub image_url: String,
    pub images: Json,
    #[sea_orm(column_type = "Text")]
    pub specs: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub data_ai_hint: Option<String>,
    pub featured: bool,
    pub new_arrival: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
