//! Save/load across store instances and storage backends.

#![allow(clippy::unwrap_used)]

use polymart_core::Price;
use polymart_integration_tests::{fixture_catalog, id, memory_store};
use polymart_storefront::persistence::DEFAULT_CART_KEY;
use polymart_storefront::{CartPersistence, CartStore, FileStore, KeyValueStore, MemoryStore};

#[test]
fn test_cart_survives_reload() {
    let mut cart = memory_store();
    cart.add_product(id(1));
    cart.add_product(id(2));
    cart.increase_quantity(id(2));
    let before = cart.state().clone();

    let reloaded = CartStore::open(fixture_catalog(), cart.into_persistence());
    assert_eq!(reloaded.state(), &before);
    assert_eq!(reloaded.total_price(), Price::from_cents(17099));
}

#[test]
fn test_emptied_cart_survives_reload() {
    let mut cart = memory_store();
    cart.add_product(id(1));
    cart.remove_product(id(1));

    let persistence = cart.into_persistence();
    let raw = persistence.store().get(DEFAULT_CART_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"version":1,"items":[]}"#);
    assert!(CartStore::open(fixture_catalog(), persistence).state().is_empty());
}

#[test]
fn test_legacy_saved_cart_is_restored() {
    let mut storage = MemoryStore::new();
    storage
        .set(
            DEFAULT_CART_KEY,
            r#"[{"id":1,"name":"Wireless Headphones","price":99.99,"image":"img/1.png","quantity":3}]"#,
        )
        .unwrap();

    let mut cart = CartStore::open(fixture_catalog(), CartPersistence::new(storage));
    assert_eq!(cart.total_item_count(), 3);

    // The first write upgrades the stored layout.
    cart.decrease_quantity(id(1));
    let raw = cart.persistence().store().get(DEFAULT_CART_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["items"][0]["quantity"], 2);
}

#[test]
fn test_snapshot_fields_are_not_refetched() {
    let mut storage = MemoryStore::new();
    storage
        .set(
            DEFAULT_CART_KEY,
            r#"[{"id":1,"name":"Old Name","price":50,"image":"old.png","quantity":1}]"#,
        )
        .unwrap();

    let mut cart = CartStore::open(fixture_catalog(), CartPersistence::new(storage));
    cart.add_product(id(1));

    let line = cart.list_items().next().unwrap();
    assert_eq!(line.name, "Old Name");
    assert_eq!(line.quantity.get(), 2);
    assert_eq!(cart.total_price(), Price::from_cents(10000));
}

#[test]
fn test_corrupt_storage_loads_empty() {
    for raw in ["", "not json", "{\"version\":9,\"items\":[]}", "[{\"id\":1}]", "42"] {
        let mut storage = MemoryStore::new();
        storage.set(DEFAULT_CART_KEY, raw).unwrap();

        let mut cart = CartStore::open(fixture_catalog(), CartPersistence::new(storage));
        assert!(cart.state().is_empty(), "expected empty cart for {raw:?}");

        // The store stays usable and overwrites the bad slot.
        assert!(cart.add_product(id(2)));
        let reloaded = CartStore::open(fixture_catalog(), cart.into_persistence());
        assert_eq!(reloaded.total_item_count(), 1);
    }
}

#[test]
fn test_file_store_round_trip_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    {
        let persistence = CartPersistence::new(FileStore::new(dir.path()));
        let mut cart = CartStore::open(fixture_catalog(), persistence);
        cart.add_product(id(1));
        cart.add_product(id(3));
        cart.add_product(id(3));
    }

    let cart = CartStore::open(
        fixture_catalog(),
        CartPersistence::new(FileStore::new(dir.path())),
    );
    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_price(), Price::from_cents(10019));
    assert!(dir.path().join("polymartCart.json").exists());
}

#[test]
fn test_instances_sharing_a_key_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();
    let open = || {
        CartStore::open(
            fixture_catalog(),
            CartPersistence::new(FileStore::new(dir.path())),
        )
    };

    let mut first = open();
    let mut second = open();
    first.add_product(id(1));
    second.add_product(id(2));

    let reloaded = open();
    let ids: Vec<_> = reloaded.list_items().map(|line| line.id).collect();
    assert_eq!(ids, vec![id(2)]);
}

#[test]
fn test_write_failure_keeps_cart_in_memory() {
    // A key with a path separator makes every FileStore write fail.
    let dir = tempfile::tempdir().unwrap();
    let persistence = CartPersistence::with_key(FileStore::new(dir.path()), "bad/key");
    let mut cart = CartStore::open(fixture_catalog(), persistence);

    assert!(cart.add_product(id(1)));
    assert_eq!(cart.total_item_count(), 1);
}
