//! Price and rate reconciliation.
//!
//! Two independent percentage lanes hang off the same reference price: the
//! sales lane (discount rate, unit price) and the supplier lane (supplier
//! rate, derived cost). Every transform here takes the current item plus
//! one authoritative new value and returns a fully updated item; nothing is
//! mutated in place and cost figures are never stored.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::{CostBreakdown, LineItem};
use crate::services::index::CatalogIndex;
use crate::services::matcher::{self, MatchResult};

/// Round to the nearest whole currency unit, halves away from zero.
pub(crate) fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Domain price rounding: nearest whole unit, then nearest multiple of 10.
/// Quoted unit prices never carry odd trailing digits.
pub fn round_to_ten(value: Decimal) -> Decimal {
    round_unit(round_unit(value) / Decimal::TEN) * Decimal::TEN
}

/// Reference price a percentage rate is applied against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBasis {
    base: Decimal,
}

impl PriceBasis {
    /// Full resolution for rate-driven price transforms: live product
    /// reference price, else the price snapshotted on the item, else the
    /// item's current unit price as a last resort.
    pub fn resolve(matched: &MatchResult<'_>, item: &LineItem) -> Self {
        let base = match matched {
            MatchResult::Live(product) => product.reference_price(),
            MatchResult::Snapshot { base_price } => *base_price,
            MatchResult::Unmatched => item.unit_price,
        };
        Self { base }
    }

    /// Reference-only resolution for back-deriving a rate from a typed
    /// price. Without a real reference there is nothing meaningful to
    /// compare against, so this never falls back to the unit price.
    pub fn reference(matched: &MatchResult<'_>) -> Self {
        let base = match matched {
            MatchResult::Live(product) => product.reference_price(),
            MatchResult::Snapshot { base_price } => *base_price,
            MatchResult::Unmatched => Decimal::ZERO,
        };
        Self { base }
    }

    pub fn from_base(base: Decimal) -> Self {
        Self { base }
    }

    pub fn base(&self) -> Decimal {
        self.base
    }

    /// A zero or negative base carries no pricing information.
    pub fn is_missing(&self) -> bool {
        self.base <= Decimal::ZERO
    }
}

/// Rate in percent implied by a unit price against a basis: zero when the
/// basis is missing, otherwise `round((1 - price / base) * 100)`.
pub fn implied_rate(unit_price: Decimal, basis: PriceBasis) -> Decimal {
    if basis.is_missing() {
        return Decimal::ZERO;
    }
    round_unit((Decimal::ONE - unit_price / basis.base()) * Decimal::ONE_HUNDRED)
}

/// `roundTo10(base * (100 - rate) / 100)`, the markdown formula both lanes
/// share.
fn rate_price(basis: PriceBasis, rate: Decimal) -> Decimal {
    round_to_ten(basis.base() * (Decimal::ONE_HUNDRED - rate) / Decimal::ONE_HUNDRED)
}

/// Which of the two independent price lanes a batch edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLane {
    Sales,
    Supplier,
}

/// Price reconciliation service.
pub struct PriceReconciler;

impl PriceReconciler {
    /// The user typed a sales price: adopt it, recompute the amount, and
    /// back-derive the discount rate where a reference base exists.
    pub fn set_unit_price(
        item: &LineItem,
        matched: &MatchResult<'_>,
        new_price: Decimal,
    ) -> LineItem {
        let mut updated = item.clone();
        updated.unit_price = new_price;
        updated.amount = new_price * Decimal::from(updated.quantity);
        updated.discount_rate = Some(implied_rate(new_price, PriceBasis::reference(matched)));
        updated
    }

    /// The user typed a sales discount rate: store it and derive the
    /// rounded unit price off the base. With no usable base the price is
    /// left alone and only the rate is recorded.
    pub fn set_discount_rate(item: &LineItem, matched: &MatchResult<'_>, rate: Decimal) -> LineItem {
        let mut updated = item.clone();
        updated.discount_rate = Some(rate);
        let basis = PriceBasis::resolve(matched, item);
        if !basis.is_missing() {
            updated.unit_price = rate_price(basis, rate);
        }
        updated.amount = updated.unit_price * Decimal::from(updated.quantity);
        updated
    }

    /// The user typed a supplier rate: store it, nothing else. Cost and
    /// profit are derived on read via [`PriceReconciler::cost_breakdown`]
    /// and this lane never touches the sales price.
    pub fn set_supplier_rate(item: &LineItem, rate: Decimal) -> LineItem {
        let mut updated = item.clone();
        updated.supplier_rate = Some(rate);
        updated.amount = updated.unit_price * Decimal::from(updated.quantity);
        updated
    }

    /// Quantity change: recompute the amount. Negative input clamps to
    /// zero, same as the document reader.
    pub fn set_quantity(item: &LineItem, quantity: i64) -> LineItem {
        let mut updated = item.clone();
        updated.quantity = quantity.max(0);
        updated.amount = updated.unit_price * Decimal::from(updated.quantity);
        updated
    }

    /// Supplier-lane figures for one item, derived fresh on every call.
    ///
    /// The supplier rate falls back to the matched product's default when
    /// the item has none of its own.
    pub fn cost_breakdown(item: &LineItem, matched: &MatchResult<'_>) -> CostBreakdown {
        let rate = item.supplier_rate.unwrap_or_else(|| match matched {
            MatchResult::Live(product) => product.supplier_rate_default,
            _ => Decimal::ZERO,
        });
        let basis = PriceBasis::resolve(matched, item);
        let cost_price = if basis.is_missing() {
            Decimal::ZERO
        } else {
            rate_price(basis, rate)
        };
        let quantity = Decimal::from(item.quantity);
        CostBreakdown {
            cost_price,
            cost_amount: cost_price * quantity,
            profit: (item.unit_price - cost_price) * quantity,
        }
    }

    /// Apply one rate to a whole collection. Each item is resolved and
    /// updated independently against its own base price; an item that
    /// cannot derive a price still records the rate.
    pub fn bulk_apply_rate(
        items: &[LineItem],
        index: &CatalogIndex,
        rate: Decimal,
        lane: RateLane,
    ) -> Vec<LineItem> {
        debug!(count = items.len(), %rate, lane = ?lane, "bulk rate apply");
        items
            .iter()
            .map(|item| match lane {
                RateLane::Sales => {
                    let matched = matcher::resolve(item, index);
                    Self::set_discount_rate(item, &matched, rate)
                }
                RateLane::Supplier => Self::set_supplier_rate(item, rate),
            })
            .collect()
    }
}
