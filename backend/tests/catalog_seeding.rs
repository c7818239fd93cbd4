//! Truncate-then-insert seeding against the in-memory store.

mod support;

use std::sync::Arc;

use rstest::rstest;
use storefront::domain::catalog_seed::{SEED_USER_EMAIL, SEED_USER_NAME};
use storefront::domain::ports::{CatalogSeedOutcome, ProductRepository};
use storefront::domain::{CatalogSeeder, Role};
use storefront::test_support::in_memory::InMemoryCatalogStore;

#[rstest]
#[tokio::test]
async fn seeding_twice_keeps_one_user_and_six_products() {
    let store = Arc::new(InMemoryCatalogStore::default());
    let seeder = CatalogSeeder::new(store.clone());

    let first = seeder.seed().await.expect("first run");
    let second = seeder.seed().await.expect("second run");

    let expected = CatalogSeedOutcome {
        users_inserted: 1,
        products_inserted: 6,
    };
    assert_eq!(first, expected);
    assert_eq!(second, expected);
    assert_eq!(store.user_count(), 1);
    assert_eq!(store.product_count(), 6);
}

#[rstest]
#[tokio::test]
async fn seeding_replaces_existing_users() {
    let store = support::seeded_store().await;
    support::add_user(&store, Role::Admin).await;
    assert_eq!(store.user_count(), 2);

    CatalogSeeder::new(store.clone()).seed().await.expect("reseed");

    let users = store.users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name().as_str(), SEED_USER_NAME);
    assert_eq!(users[0].email().as_str(), SEED_USER_EMAIL);
    assert_eq!(users[0].role(), Role::Customer);
}

#[rstest]
#[tokio::test]
async fn reseeded_products_get_fresh_ids() {
    let store = support::seeded_store().await;
    CatalogSeeder::new(store.clone()).seed().await.expect("reseed");

    let entries = store.list_all().await.expect("list");
    let ids: Vec<i64> = entries.iter().map(|entry| entry.id().get()).collect();
    assert_eq!(ids, vec![7, 8, 9, 10, 11, 12]);
    assert_eq!(entries[0].name().as_str(), "Ducky One 2 Mini");
    assert_eq!(entries[5].quantity_on_hand().get(), 0);
}
