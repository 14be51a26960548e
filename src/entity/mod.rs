pub mod laptops;

pub use laptops::Entity as Laptops;
