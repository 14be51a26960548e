use std::collections::HashSet;

use laptop_storefront::{
    catalog::{LaptopRepository, PostgresCatalog},
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    models::{LaptopCondition, NewLaptop},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let catalog = PostgresCatalog::new(create_orm_conn(&pool));
    let existing: HashSet<String> = catalog
        .list(&Default::default())
        .await?
        .into_iter()
        .map(|laptop| laptop.name)
        .collect();

    let mut inserted = 0;
    for laptop in sample_laptops() {
        if existing.contains(&laptop.name) {
            continue;
        }
        let saved = catalog.insert(laptop).await?;
        println!("Seeded {} ({})", saved.name, saved.id);
        inserted += 1;
    }

    println!("Seed completed. {inserted} laptop(s) added");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn laptop(
    name: &str,
    brand: &str,
    ram: &str,
    processor: &str,
    storage: &str,
    price: i64,
    condition: LaptopCondition,
    stock: i32,
    featured: bool,
    new_arrival: bool,
) -> NewLaptop {
    NewLaptop {
        name: name.to_string(),
        brand: brand.to_string(),
        ram: ram.to_string(),
        processor: processor.to_string(),
        storage: storage.to_string(),
        graphics: "Integrated".to_string(),
        display: "14-inch FHD".to_string(),
        price,
        condition,
        stock,
        image_url: String::new(),
        images: Vec::new(),
        specs: format!("{processor}, {ram} RAM, {storage}, 14-inch FHD display"),
        description: None,
        data_ai_hint: Some("laptop computer".to_string()),
        featured,
        new_arrival,
    }
}

fn sample_laptops() -> Vec<NewLaptop> {
    vec![
        laptop(
            "Dell XPS 13",
            "Dell",
            "16GB",
            "Intel Core i7-1360P",
            "512GB SSD",
            285_000,
            LaptopCondition::New,
            5,
            true,
            true,
        ),
        laptop(
            "Dell Latitude 7490",
            "Dell",
            "8GB",
            "Intel Core i5-8350U",
            "256GB SSD",
            95_000,
            LaptopCondition::Used,
            3,
            false,
            false,
        ),
        laptop(
            "HP EliteBook 840 G6",
            "HP",
            "16GB",
            "Intel Core i5-8365U",
            "512GB SSD",
            120_000,
            LaptopCondition::Refurbished,
            4,
            true,
            false,
        ),
        laptop(
            "Lenovo ThinkPad T14",
            "Lenovo",
            "16GB",
            "AMD Ryzen 7 PRO 4750U",
            "512GB SSD",
            165_000,
            LaptopCondition::Used,
            2,
            false,
            true,
        ),
        laptop(
            "Apple MacBook Air M2",
            "Apple",
            "8GB",
            "Apple M2",
            "256GB SSD",
            310_000,
            LaptopCondition::New,
            6,
            true,
            true,
        ),
        laptop(
            "Asus Zenbook 14",
            "Asus",
            "16GB",
            "Intel Core Ultra 5 125H",
            "1TB SSD",
            240_000,
            LaptopCondition::New,
            0,
            false,
            true,
        ),
    ]
}
