//! Product matching cascade.
//!
//! A line item is linked to a catalog product by trying, in order: the id
//! it already carries, the SKU candidate rebuilt from its spec fields, and
//! the normalized spec key. The first hit wins and the cascade stops.

use rust_decimal::Decimal;
use tracing::trace;

use crate::models::{LineItem, Product};
use crate::services::index::CatalogIndex;
use crate::services::sku;

/// Outcome of resolving a line item against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'a> {
    /// The item resolved to a live catalog product.
    Live(&'a Product),
    /// No live product, but the item still carries the reference price
    /// snapshotted at its last successful match.
    Snapshot { base_price: Decimal },
    /// Nothing to price against beyond what the user typed.
    Unmatched,
}

impl MatchResult<'_> {
    /// The live product, when there is one.
    pub fn product(&self) -> Option<&Product> {
        match self {
            MatchResult::Live(product) => Some(product),
            _ => None,
        }
    }
}

/// Find the live catalog product for a line item, if any.
pub fn match_item<'a>(item: &LineItem, index: &'a CatalogIndex) -> Option<&'a Product> {
    if let Some(product_id) = item.product_id.as_deref() {
        if !product_id.is_empty() {
            if let Some(product) = index.lookup_id(product_id) {
                trace!(item = %item.id, product = %product.id, "matched by direct id");
                return Some(product);
            }
        }
    }

    // Items entered by hand carry no product id; rebuild the id the catalog
    // would have assigned. Incomplete spec fields simply skip this rung.
    if let Ok(candidate) =
        sku::generate_candidate_id(&item.name, &item.thickness, &item.size, &item.material)
    {
        if let Some(product) = index.lookup_id(&candidate) {
            trace!(item = %item.id, candidate = %candidate, product = %product.id, "matched by generated sku");
            return Some(product);
        }
    }

    if let Some(product) = index.lookup_spec(&item.name, &item.thickness, &item.size, &item.material)
    {
        trace!(item = %item.id, product = %product.id, "matched by spec key");
        return Some(product);
    }

    trace!(item = %item.id, "no catalog match");
    None
}

/// Resolve a line item to an explicit match outcome.
///
/// Where [`match_item`] answers "which product", this also distinguishes the
/// two unmatched cases: a row that still has a usable price snapshot from an
/// earlier match, and a row with nothing at all.
pub fn resolve<'a>(item: &LineItem, index: &'a CatalogIndex) -> MatchResult<'a> {
    if let Some(product) = match_item(item, index) {
        return MatchResult::Live(product);
    }
    match item.base_price {
        Some(base) if base > Decimal::ZERO => MatchResult::Snapshot { base_price: base },
        _ => MatchResult::Unmatched,
    }
}
