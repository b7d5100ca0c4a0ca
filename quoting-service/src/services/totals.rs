//! Document-level totals.
//!
//! Sums the customer-facing lane (item amounts, additional charges, global
//! discount, VAT) and the supplier lane (cost, profit) over an enriched
//! document. Per-item figures come in pre-rounded; only the document-level
//! discount and VAT introduce new rounding here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AdditionalCharge, EnrichedLineItem};
use crate::services::pricing::round_unit;

/// Customer-facing totals block of one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line item amounts.
    pub item_total: Decimal,
    /// Sum of additional charges.
    pub charges_total: Decimal,
    /// Document-level discount, rounded to a whole unit.
    pub discount_amount: Decimal,
    /// Taxable amount after discount.
    pub supply_price: Decimal,
    pub vat_amount: Decimal,
    pub grand_total: Decimal,
}

/// Supplier-facing totals over the same document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierTotals {
    pub total_cost: Decimal,
    pub total_profit: Decimal,
}

/// Compute the customer-facing totals block.
///
/// `global_discount_rate` and `vat_rate_percent` are percentages. Stored
/// unit prices are authoritative: totals always derive from the amounts as
/// they stand, never from re-applying rates.
pub fn document_totals(
    items: &[EnrichedLineItem],
    charges: &[AdditionalCharge],
    global_discount_rate: Decimal,
    vat_rate_percent: Decimal,
) -> DocumentTotals {
    let item_total: Decimal = items.iter().map(|e| e.item.amount).sum();
    let charges_total: Decimal = charges.iter().map(|c| c.amount).sum();
    let subtotal = item_total + charges_total;

    let discount_amount = round_unit(subtotal * global_discount_rate / Decimal::ONE_HUNDRED);
    let supply_price = subtotal - discount_amount;
    let vat_amount = round_unit(supply_price * vat_rate_percent / Decimal::ONE_HUNDRED);

    DocumentTotals {
        item_total,
        charges_total,
        discount_amount,
        supply_price,
        vat_amount,
        grand_total: supply_price + vat_amount,
    }
}

/// Sum the supplier lane over an enriched document.
pub fn supplier_totals(items: &[EnrichedLineItem]) -> SupplierTotals {
    items.iter().fold(SupplierTotals::default(), |acc, e| {
        SupplierTotals {
            total_cost: acc.total_cost + e.cost.cost_amount,
            total_profit: acc.total_profit + e.cost.profit,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostBreakdown, LineItem};

    fn enriched(amount: i64, cost_amount: i64, profit: i64) -> EnrichedLineItem {
        EnrichedLineItem {
            item: LineItem {
                id: "item".to_string(),
                product_id: None,
                name: "PIPE".to_string(),
                thickness: "S40S".to_string(),
                size: "100A".to_string(),
                material: "STS304".to_string(),
                quantity: 1,
                unit_price: Decimal::from(amount),
                amount: Decimal::from(amount),
                base_price: None,
                discount_rate: None,
                supplier_rate: None,
                is_verified: false,
            },
            current_stock: 0,
            stock_status: None,
            location: None,
            maker: None,
            cost: CostBreakdown {
                cost_price: Decimal::from(cost_amount),
                cost_amount: Decimal::from(cost_amount),
                profit: Decimal::from(profit),
            },
            catalog_revision: 1,
        }
    }

    fn charge(name: &str, amount: i64) -> AdditionalCharge {
        AdditionalCharge {
            name: name.to_string(),
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn test_document_totals_with_charges_discount_and_vat() {
        let items = vec![enriched(2160, 0, 0), enriched(3600, 0, 0)];
        let charges = vec![charge("freight", 500)];

        let totals = document_totals(&items, &charges, Decimal::from(5), Decimal::from(10));

        assert_eq!(totals.item_total, Decimal::from(5760));
        assert_eq!(totals.charges_total, Decimal::from(500));
        // round(6260 * 5%) = 313
        assert_eq!(totals.discount_amount, Decimal::from(313));
        assert_eq!(totals.supply_price, Decimal::from(5947));
        // round(5947 * 10%) = 595
        assert_eq!(totals.vat_amount, Decimal::from(595));
        assert_eq!(totals.grand_total, Decimal::from(6542));
    }

    #[test]
    fn test_document_totals_without_discount() {
        let items = vec![enriched(10000, 0, 0)];
        let totals = document_totals(&items, &[], Decimal::ZERO, Decimal::from(10));

        assert_eq!(totals.discount_amount, Decimal::ZERO);
        assert_eq!(totals.supply_price, Decimal::from(10000));
        assert_eq!(totals.vat_amount, Decimal::from(1000));
        assert_eq!(totals.grand_total, Decimal::from(11000));
    }

    #[test]
    fn test_negative_charge_acts_as_allowance() {
        let items = vec![enriched(5000, 0, 0)];
        let charges = vec![charge("old stock allowance", -500)];
        let totals = document_totals(&items, &charges, Decimal::ZERO, Decimal::from(10));

        assert_eq!(totals.supply_price, Decimal::from(4500));
        assert_eq!(totals.vat_amount, Decimal::from(450));
        assert_eq!(totals.grand_total, Decimal::from(4950));
    }

    #[test]
    fn test_supplier_totals_sum_cost_lane() {
        let items = vec![enriched(5000, 3000, 2000), enriched(2000, 1500, 500)];
        let totals = supplier_totals(&items);

        assert_eq!(totals.total_cost, Decimal::from(4500));
        assert_eq!(totals.total_profit, Decimal::from(2500));
    }

    #[test]
    fn test_empty_document_totals_are_zero() {
        let totals = document_totals(&[], &[], Decimal::from(5), Decimal::from(10));
        assert_eq!(totals.item_total, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
    }
}
