//! Test helper module for quoting-service integration tests.
//!
//! Provides a small realistic catalog and line item fixtures shared by the
//! integration tests.

#![allow(dead_code)]

use quoting_service::models::{CatalogSnapshot, LineItem, Product, StockStatus};
use quoting_service::services::{CatalogIndex, CollisionPolicy};
use rust_decimal::Decimal;
use std::sync::{Arc, Once};

pub const CATALOG_REVISION: u64 = 42;

static TRACING: Once = Once::new();

/// Initialize JSON tracing once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        service_core::observability::init_tracing("quoting-service-tests", "debug");
    });
}

/// Build one catalog product.
pub fn product(
    id: &str,
    name: &str,
    thickness: &str,
    size: &str,
    material: &str,
    base_price: i64,
    stock: i64,
) -> Product {
    let status = if stock > 0 {
        StockStatus::Available
    } else {
        StockStatus::OutOfStock
    };
    Product {
        id: id.to_string(),
        name: name.to_string(),
        thickness: thickness.to_string(),
        size: size.to_string(),
        material: material.to_string(),
        current_stock: stock,
        stock_status: status,
        base_price: Some(Decimal::from(base_price)),
        unit_price: Decimal::from(base_price),
        supplier_rate_default: Decimal::from(30),
        location: Some("A-1".to_string()),
        maker: Some("KP".to_string()),
    }
}

/// Five-product piping catalog used across the integration tests.
pub fn catalog() -> Vec<Product> {
    vec![
        product(
            "ELBOW90L-S40S-100A-STS304",
            "ELBOW90L",
            "S40S",
            "100A",
            "STS304",
            1200,
            24,
        ),
        product(
            "CAP-S40S-2 X 1-STS304",
            "CAP",
            "S40S",
            "2 X 1",
            "STS304",
            800,
            0,
        ),
        product(
            "PIPE-S40S-100A-STS304",
            "PIPE",
            "S40S",
            "100A",
            "STS304",
            15000,
            12,
        ),
        // Early catalog entries predate the SKU convention.
        product("LEGACY-0042", "FLANGE", "10K", "100A", "SS400", 2000, 3),
        product(
            "TEE-S80S-50A-STS316L",
            "TEE",
            "S80S",
            "50A",
            "STS316L",
            3500,
            7,
        ),
    ]
}

/// Index over [`catalog`] at [`CATALOG_REVISION`].
pub fn catalog_index() -> CatalogIndex {
    init_tracing();
    CatalogIndex::build(
        Arc::new(CatalogSnapshot::with_revision(CATALOG_REVISION, catalog())),
        CollisionPolicy::KeepFirst,
    )
}

/// Hand-entered line item with no product link yet.
pub fn manual_item(
    id: &str,
    name: &str,
    thickness: &str,
    size: &str,
    material: &str,
    quantity: i64,
    unit_price: i64,
) -> LineItem {
    LineItem {
        id: id.to_string(),
        product_id: None,
        name: name.to_string(),
        thickness: thickness.to_string(),
        size: size.to_string(),
        material: material.to_string(),
        quantity,
        unit_price: Decimal::from(unit_price),
        amount: Decimal::from(unit_price * quantity),
        base_price: None,
        discount_rate: None,
        supplier_rate: None,
        is_verified: false,
    }
}

/// Line item already carrying a product link.
pub fn linked_item(id: &str, product_id: &str, quantity: i64, unit_price: i64) -> LineItem {
    let mut item = manual_item(id, "", "", "", "", quantity, unit_price);
    item.product_id = Some(product_id.to_string());
    item
}
