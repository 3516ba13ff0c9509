//! Helpers for integration tests.

#![allow(dead_code)]

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use storefront::db::{DbPool, establish_connection_pool};
use storefront::schema::{brands, categories, products};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn insert_brand(conn: &mut SqliteConnection, id: i32, name: &str) {
    diesel::insert_into(brands::table)
        .values((brands::id.eq(id), brands::name.eq(name)))
        .execute(conn)
        .expect("should create brand");
}

pub fn insert_category(conn: &mut SqliteConnection, id: i32, parent_id: Option<i32>, url: &str) {
    diesel::insert_into(categories::table)
        .values((
            categories::id.eq(id),
            categories::parent_id.eq(parent_id),
            categories::name.eq(url.to_uppercase()),
            categories::url.eq(url),
        ))
        .execute(conn)
        .expect("should create category");
}

pub fn insert_product(
    conn: &mut SqliteConnection,
    id: i32,
    category_id: i32,
    brand_id: Option<i32>,
    name: &str,
    price: f64,
    is_available: bool,
) {
    diesel::insert_into(products::table)
        .values((
            products::id.eq(id),
            products::category_id.eq(category_id),
            products::brand_id.eq(brand_id),
            products::name.eq(name),
            products::price.eq(price),
            products::is_available.eq(is_available),
        ))
        .execute(conn)
        .expect("should create product");
}

/// Seeds `electronics` -> `computers` (-> `laptops`, `tablets`), `phones`,
/// plus a separate `garden` group that also has a `tablets` slug beneath it.
pub fn seed_catalog(conn: &mut SqliteConnection) {
    insert_brand(conn, 1, "Acme");
    insert_brand(conn, 2, "Globex");

    insert_category(conn, 1, None, "electronics");
    insert_category(conn, 2, Some(1), "computers");
    insert_category(conn, 3, Some(1), "phones");
    insert_category(conn, 4, Some(2), "laptops");
    insert_category(conn, 5, Some(2), "tablets");
    insert_category(conn, 6, None, "garden");
    insert_category(conn, 7, Some(6), "tablets");

    insert_product(conn, 1, 1, Some(1), "Cable", 10.0, true);
    insert_product(conn, 2, 2, Some(2), "Desktop", 800.0, true);
    insert_product(conn, 3, 3, Some(1), "Phone", 500.0, false);
    insert_product(conn, 4, 4, Some(2), "Laptop", 1200.0, true);
    insert_product(conn, 5, 5, None, "Tablet", 400.0, true);
    insert_product(conn, 6, 7, Some(1), "Fertilizer tablets", 5.0, true);
}
