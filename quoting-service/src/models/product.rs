//! Product catalog models for quoting-service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Stock availability of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Available,
    CheckLeadTime,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "AVAILABLE",
            StockStatus::CheckLeadTime => "CHECK_LEAD_TIME",
            StockStatus::OutOfStock => "OUT_OF_STOCK",
        }
    }
}

/// One product in the catalog.
///
/// `id` follows the `NAME-THICKNESS-SIZE-MATERIAL` convention but is treated
/// as opaque here; the spec fields are carried separately for key-based
/// matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub thickness: String,
    pub size: String,
    pub material: String,
    pub current_stock: i64,
    pub stock_status: StockStatus,
    /// List price rate math is applied against. Absent for products that
    /// only ever carried a direct unit price.
    #[serde(default)]
    pub base_price: Option<Decimal>,
    pub unit_price: Decimal,
    /// Supplier rate seeded onto newly linked line items.
    #[serde(default)]
    pub supplier_rate_default: Decimal,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub maker: Option<String>,
}

impl Product {
    /// Reference price for rate calculations: the base price when present,
    /// otherwise the unit price.
    pub fn reference_price(&self) -> Decimal {
        self.base_price.unwrap_or(self.unit_price)
    }

    /// Availability of this product against a requested quantity.
    pub fn availability_for(&self, requested_qty: i64) -> StockStatus {
        if self.current_stock >= requested_qty {
            StockStatus::Available
        } else if self.current_stock > 0 {
            StockStatus::CheckLeadTime
        } else {
            StockStatus::OutOfStock
        }
    }
}

// Snapshot revisions only need to be distinct within a process, so a
// process-wide counter is enough.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Immutable snapshot of the product catalog.
///
/// Produced by whatever fetch layer feeds the engine; everything in this
/// crate only reads from it. The revision lets derived structures such as
/// the catalog index tell when they were built against an older catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub revision: u64,
    pub fetched_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    /// Snapshot with a freshly assigned revision.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
            fetched_at: Utc::now(),
            products,
        }
    }

    /// Snapshot with a caller-chosen revision, for callers that track
    /// revisions themselves (or tests that need fixed ones).
    pub fn with_revision(revision: u64, products: Vec<Product>) -> Self {
        Self {
            revision,
            fetched_at: Utc::now(),
            products,
        }
    }
}
