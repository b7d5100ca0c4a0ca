//! Line item models for quoting-service.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::error::AppError;
use uuid::Uuid;

use super::product::{CatalogSnapshot, StockStatus};

/// One row of a quotation or purchase order.
///
/// Only user intent and match-time snapshots live here. Anything derived
/// from the live catalog (stock, cost lane figures) belongs to
/// [`EnrichedLineItem`] and is recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    /// Id of the catalog product this row is linked to, if any.
    #[serde(default)]
    pub product_id: Option<String>,
    pub name: String,
    pub thickness: String,
    pub size: String,
    pub material: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    /// Always `unit_price * quantity`; recomputed on every edit.
    pub amount: Decimal,
    /// Reference price snapshotted when the row was last matched.
    #[serde(default)]
    pub base_price: Option<Decimal>,
    /// Sales discount in percent off the base price.
    #[serde(default)]
    pub discount_rate: Option<Decimal>,
    /// Supplier discount in percent off the base price.
    #[serde(default)]
    pub supplier_rate: Option<Decimal>,
    /// True only while the row resolves to a live catalog product.
    #[serde(default)]
    pub is_verified: bool,
}

/// Cost-lane figures derived for one line item. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// What one unit costs us from the supplier.
    pub cost_price: Decimal,
    /// `cost_price * quantity`.
    pub cost_amount: Decimal,
    /// `(unit_price - cost_price) * quantity`.
    pub profit: Decimal,
}

/// A line item with the live catalog overlay applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedLineItem {
    pub item: LineItem,
    pub current_stock: i64,
    #[serde(default)]
    pub stock_status: Option<StockStatus>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub maker: Option<String>,
    pub cost: CostBreakdown,
    /// Revision of the catalog snapshot this enrichment was computed from.
    pub catalog_revision: u64,
}

impl EnrichedLineItem {
    /// True when the enrichment was computed against an older snapshot and
    /// should be redone before display.
    pub fn is_stale(&self, snapshot: &CatalogSnapshot) -> bool {
        self.catalog_revision != snapshot.revision
    }
}

// ---- Persisted document reader ----

/// Raw line item as stored on historic documents.
///
/// Two field-naming generations coexist in stored data (`unitPrice` and
/// `unit_price`, `name` and `item_name`, and so on), and numeric fields may
/// arrive as JSON numbers or as strings. Every field is optional here;
/// [`RawLineItem::into_line_item`] merges the generations and coerces the
/// values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLineItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "productId")]
    pub product_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub thickness: Option<String>,
    #[serde(default)]
    pub item_thickness: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub item_size: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub item_material: Option<String>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub qty: Option<Value>,
    #[serde(default, rename = "unitPrice")]
    pub unit_price: Option<Value>,
    #[serde(default, rename = "unit_price")]
    pub unit_price_legacy: Option<Value>,
    #[serde(default)]
    pub base_price: Option<Value>,
    #[serde(default, rename = "discountRate")]
    pub discount_rate: Option<Value>,
    #[serde(default, rename = "discount_rate")]
    pub discount_rate_legacy: Option<Value>,
    #[serde(default, rename = "supplierRate")]
    pub supplier_rate: Option<Value>,
    #[serde(default, rename = "supplier_rate")]
    pub supplier_rate_legacy: Option<Value>,
}

impl RawLineItem {
    /// Merge both field generations into a well-formed [`LineItem`].
    ///
    /// Current-generation names win over legacy ones. Rows without an id get
    /// a fresh one. The amount is always recomputed; whatever was stored is
    /// ignored. Verification state is left false since only enrichment can
    /// establish it.
    pub fn into_line_item(self) -> LineItem {
        let quantity = coerce_quantity(self.quantity.as_ref().or(self.qty.as_ref()));
        let unit_price =
            coerce_decimal(self.unit_price.as_ref().or(self.unit_price_legacy.as_ref()))
                .unwrap_or(Decimal::ZERO);
        let base_price = coerce_decimal(self.base_price.as_ref());
        let discount_rate =
            coerce_decimal(self.discount_rate.as_ref().or(self.discount_rate_legacy.as_ref()));
        let supplier_rate =
            coerce_decimal(self.supplier_rate.as_ref().or(self.supplier_rate_legacy.as_ref()));

        LineItem {
            id: non_empty(self.id).unwrap_or_else(|| Uuid::new_v4().to_string()),
            product_id: non_empty(self.product_id),
            name: non_empty(self.name)
                .or(non_empty(self.item_name))
                .unwrap_or_default(),
            thickness: non_empty(self.thickness)
                .or(non_empty(self.item_thickness))
                .unwrap_or_default(),
            size: non_empty(self.size)
                .or(non_empty(self.item_size))
                .unwrap_or_default(),
            material: non_empty(self.material)
                .or(non_empty(self.item_material))
                .unwrap_or_default(),
            quantity,
            unit_price,
            amount: unit_price * Decimal::from(quantity),
            base_price,
            discount_rate,
            supplier_rate,
            is_verified: false,
        }
    }
}

/// Read a persisted document's line items, tolerating either field-name
/// generation and stringly-typed numbers.
pub fn parse_line_items(json: &str) -> Result<Vec<LineItem>, AppError> {
    let raw: Vec<RawLineItem> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(RawLineItem::into_line_item).collect())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn coerce_decimal(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_quantity(value: Option<&Value>) -> i64 {
    coerce_decimal(value)
        .and_then(|d| d.trunc().to_i64())
        .unwrap_or(0)
        .max(0)
}
