use laptop_storefront::{
    catalog::{LaptopFilter, LaptopRepository, PostgresCatalog},
    db::{create_orm_conn, create_pool, run_migrations},
    models::{LaptopChanges, LaptopCondition, NewLaptop},
};
use uuid::Uuid;

fn new_laptop(name: &str, brand: &str, price: i64) -> NewLaptop {
    NewLaptop {
        name: name.to_string(),
        brand: brand.to_string(),
        ram: "16GB".to_string(),
        processor: "Intel Core i7-1165G7".to_string(),
        storage: "512GB SSD".to_string(),
        graphics: "Iris Xe".to_string(),
        display: "13.3-inch FHD".to_string(),
        price,
        condition: LaptopCondition::Refurbished,
        stock: 2,
        image_url: String::new(),
        images: vec!["https://example.com/1.png".to_string()],
        specs: "i7-1165G7, 16GB LPDDR4x, 512GB NVMe".to_string(),
        description: None,
        data_ai_hint: Some("silver laptop".to_string()),
        featured: true,
        new_arrival: false,
    }
}

// Repository round trip against a real database: insert -> filter -> update -> delete.
#[tokio::test]
async fn postgres_catalog_crud_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run catalog database tests."
            );
            return Ok(());
        }
    };

    let pool = create_pool(&database_url).await?;
    run_migrations(&pool).await?;
    let catalog = PostgresCatalog::new(create_orm_conn(&pool));

    // Unique brand keeps this run isolated from other rows.
    let brand = format!("TestBrand-{}", Uuid::new_v4());
    let cheap = catalog.insert(new_laptop("Cheap One", &brand, 50_000)).await?;
    let pricey = catalog.insert(new_laptop("Pricey One", &brand, 500_000)).await?;

    let fetched = catalog.get(cheap.id).await?.expect("inserted laptop");
    assert_eq!(fetched.name, "Cheap One");
    assert_eq!(fetched.condition, LaptopCondition::Refurbished);
    assert_eq!(fetched.images, vec!["https://example.com/1.png".to_string()]);

    let filtered = catalog
        .list(&LaptopFilter {
            brand: Some(brand.clone()),
            max_price: Some(100_000),
            processor: Some("I7".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, cheap.id);

    let updated = catalog
        .update(
            pricey.id,
            LaptopChanges {
                stock: Some(0),
                description: Some(Some("Display unit".to_string())),
                ..Default::default()
            },
        )
        .await?
        .expect("laptop exists");
    assert_eq!(updated.stock, 0);
    assert_eq!(updated.description.as_deref(), Some("Display unit"));
    assert_eq!(updated.price, 500_000);

    assert!(catalog.brands().await?.contains(&brand));

    assert!(catalog.delete(cheap.id).await?);
    assert!(catalog.delete(pricey.id).await?);
    assert!(!catalog.delete(pricey.id).await?);
    assert!(catalog.get(cheap.id).await?.is_none());

    Ok(())
}
