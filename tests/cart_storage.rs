mod common;

use std::fs;

use common::laptop;
use laptop_storefront::cart::{
    CART_STORAGE_KEY, CartStorage, CartStore, CheckoutChannel, FileStorage,
};

#[test]
fn missing_file_loads_as_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    assert_eq!(
        storage.path(),
        dir.path().join(format!("{CART_STORAGE_KEY}.json"))
    );
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn file_storage_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let a = laptop("Product A", "Dell", 100_000, 2);
    let b = laptop("Product B", "HP", 50_000, 5);
    {
        let mut store = CartStore::open(FileStorage::new(dir.path()), CheckoutChannel::default());
        store.add_to_cart(&a, 2);
        store.add_to_cart(&b, 3);
    }

    let store = CartStore::open(FileStorage::new(dir.path()), CheckoutChannel::default());
    assert_eq!(store.cart_total(), 350_000);
    assert_eq!(store.item_count(), 5);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("profile").join("cart");
    let storage = FileStorage::with_key(&nested, "guestCart");

    storage.save(&[]).unwrap();

    assert!(nested.join("guestCart.json").exists());
}

#[test]
fn corrupt_file_is_an_error_and_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    fs::write(storage.path(), "[{\"laptop\": 1}]").unwrap();

    assert!(storage.load().is_err());

    let store = CartStore::open(storage, CheckoutChannel::default());
    assert!(store.is_empty());
}
