//! Line item enrichment.
//!
//! Overlays live catalog data onto stored rows and recomputes the derived
//! cost lane. Safe to run on every recompute: inputs are never mutated and
//! running it twice over the same snapshot changes nothing.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CostBreakdown, EnrichedLineItem, LineItem};
use crate::services::index::CatalogIndex;
use crate::services::matcher::{self, MatchResult};
use crate::services::pricing::{implied_rate, PriceBasis, PriceReconciler};

/// Resolve one line item against the catalog and overlay the result.
///
/// A live match marks the row verified and overlays stock, location, base
/// price and the supplier default rate. Without a live match the row is
/// degraded instead of failed: the overlay is zeroed, flags are cleared,
/// and whatever price the user typed stays untouched.
pub fn enrich(item: &LineItem, index: &CatalogIndex) -> EnrichedLineItem {
    let matched = matcher::resolve(item, index);
    match &matched {
        MatchResult::Live(product) => {
            let mut updated = item.clone();
            updated.product_id = Some(product.id.clone());
            updated.is_verified = true;

            let reference = product.reference_price();
            updated.base_price = Some(reference);

            // Blank rows adopt the product's list price; typed prices win.
            if updated.unit_price <= Decimal::ZERO {
                updated.unit_price = product.unit_price;
            }
            if updated.discount_rate.is_none() {
                let seeded = if updated.unit_price > Decimal::ZERO {
                    implied_rate(updated.unit_price, PriceBasis::from_base(reference))
                } else {
                    Decimal::ZERO
                };
                updated.discount_rate = Some(seeded);
            }
            if updated.supplier_rate.is_none() {
                updated.supplier_rate = Some(product.supplier_rate_default);
            }
            updated.amount = updated.unit_price * Decimal::from(updated.quantity);

            let cost = PriceReconciler::cost_breakdown(&updated, &matched);
            debug!(
                item = %updated.id,
                product = %product.id,
                status = product.stock_status.as_str(),
                "enriched from live product"
            );
            EnrichedLineItem {
                item: updated,
                current_stock: product.current_stock,
                stock_status: Some(product.stock_status),
                location: product.location.clone(),
                maker: product.maker.clone(),
                cost,
                catalog_revision: index.revision(),
            }
        }
        MatchResult::Snapshot { .. } => {
            // The product is gone from the catalog but the row still has
            // its price snapshot: keep pricing usable, show no stock.
            let mut updated = item.clone();
            updated.product_id = None;
            updated.is_verified = false;
            updated.amount = updated.unit_price * Decimal::from(updated.quantity);

            let cost = PriceReconciler::cost_breakdown(&updated, &matched);
            debug!(item = %updated.id, "enriched from price snapshot");
            EnrichedLineItem {
                item: updated,
                current_stock: 0,
                stock_status: None,
                location: None,
                maker: None,
                cost,
                catalog_revision: index.revision(),
            }
        }
        MatchResult::Unmatched => {
            let mut updated = item.clone();
            updated.product_id = None;
            updated.is_verified = false;
            updated.base_price = None;
            updated.amount = updated.unit_price * Decimal::from(updated.quantity);

            debug!(item = %updated.id, "no match, row left unlinked");
            EnrichedLineItem {
                item: updated,
                current_stock: 0,
                stock_status: None,
                location: None,
                maker: None,
                cost: CostBreakdown::default(),
                catalog_revision: index.revision(),
            }
        }
    }
}

/// Enrich a whole document's rows against one index.
pub fn enrich_all(items: &[LineItem], index: &CatalogIndex) -> Vec<EnrichedLineItem> {
    items.iter().map(|item| enrich(item, index)).collect()
}
