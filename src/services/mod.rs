pub mod auth_service;
pub mod cart_service;
pub mod laptop_service;
