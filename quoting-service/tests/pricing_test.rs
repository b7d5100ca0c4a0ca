//! Pricing integration tests for quoting-service.

mod common;

use common::{catalog_index, linked_item};
use quoting_service::services::{enrich, resolve, PriceReconciler, RateLane};
use rust_decimal::Decimal;

#[test]
fn direct_match_then_discount_rate() {
    let index = catalog_index();

    // Quoted at 1000 against the elbow's base price of 1200.
    let item = linked_item("row-1", "ELBOW90L-S40S-100A-STS304", 2, 1000);
    let enriched = enrich(&item, &index);
    assert!(enriched.item.is_verified);
    assert_eq!(enriched.item.base_price, Some(Decimal::from(1200)));

    let matched = resolve(&enriched.item, &index);
    let updated = PriceReconciler::set_discount_rate(&enriched.item, &matched, Decimal::from(10));

    assert_eq!(updated.unit_price, Decimal::from(1080));
    assert_eq!(updated.amount, Decimal::from(2160));
    assert_eq!(updated.discount_rate, Some(Decimal::from(10)));
}

#[test]
fn typed_price_back_derives_the_rate() {
    let index = catalog_index();

    let item = linked_item("row-1", "ELBOW90L-S40S-100A-STS304", 2, 1200);
    let matched = resolve(&item, &index);
    let updated = PriceReconciler::set_unit_price(&item, &matched, Decimal::from(1080));

    assert_eq!(updated.discount_rate, Some(Decimal::from(10)));
    assert_eq!(updated.amount, Decimal::from(2160));
}

#[test]
fn bulk_supplier_rate_applies_to_every_item_against_its_own_base() {
    let index = catalog_index();

    let items = vec![
        linked_item("row-1", "ELBOW90L-S40S-100A-STS304", 1, 1200),
        linked_item("row-2", "CAP-S40S-2 X 1-STS304", 1, 800),
        linked_item("row-3", "PIPE-S40S-100A-STS304", 1, 15000),
        linked_item("row-4", "LEGACY-0042", 1, 2000),
        linked_item("row-5", "TEE-S80S-50A-STS316L", 1, 3500),
    ];

    let updated = PriceReconciler::bulk_apply_rate(
        &items,
        &index,
        Decimal::from(35),
        RateLane::Supplier,
    );

    assert!(updated
        .iter()
        .all(|item| item.supplier_rate == Some(Decimal::from(35))));
    // The sales lane is untouched by a supplier-side bulk edit.
    assert!(updated
        .iter()
        .zip(&items)
        .all(|(after, before)| after.unit_price == before.unit_price));

    // roundTo10(base * 65 / 100) per item base.
    let expected_costs = [780i64, 520, 9750, 1300, 2280];
    for (item, expected) in updated.iter().zip(expected_costs) {
        let matched = resolve(item, &index);
        let cost = PriceReconciler::cost_breakdown(item, &matched);
        assert_eq!(
            cost.cost_price,
            Decimal::from(expected),
            "wrong cost for {}",
            item.id
        );
    }
}

#[test]
fn fractional_rate_round_trips_through_rounded_price() {
    let index = catalog_index();

    // Stored row whose product is gone; the snapshotted base of 1000 drives
    // both lanes.
    let mut item = linked_item("row-1", "DISCONTINUED-009", 3, 1000);
    item.base_price = Some(Decimal::from(1000));
    let matched = resolve(&item, &index);

    let rate = Decimal::new(125, 1); // 12.5
    let updated = PriceReconciler::set_discount_rate(&item, &matched, rate);

    // 1000 * 87.5% = 875, carried to the nearest multiple of 10.
    assert_eq!(updated.unit_price, Decimal::from(880));
    assert_eq!(updated.amount, Decimal::from(2640));
    assert_eq!(updated.discount_rate, Some(rate));

    let costed = PriceReconciler::set_supplier_rate(&updated, rate);
    assert_eq!(costed.supplier_rate, Some(rate));
    let cost = PriceReconciler::cost_breakdown(&costed, &matched);
    assert_eq!(cost.cost_price, Decimal::from(880));

    // Typing the rounded price back yields a whole-number rate.
    let retyped = PriceReconciler::set_unit_price(&updated, &matched, Decimal::from(880));
    assert_eq!(retyped.discount_rate, Some(Decimal::from(12)));
}

#[test]
fn bulk_sales_rate_reprices_every_item() {
    let index = catalog_index();

    let items = vec![
        linked_item("row-1", "ELBOW90L-S40S-100A-STS304", 2, 1200),
        linked_item("row-2", "LEGACY-0042", 1, 2000),
    ];

    let updated =
        PriceReconciler::bulk_apply_rate(&items, &index, Decimal::from(10), RateLane::Sales);

    assert_eq!(updated[0].unit_price, Decimal::from(1080));
    assert_eq!(updated[0].amount, Decimal::from(2160));
    assert_eq!(updated[1].unit_price, Decimal::from(1800));

    for item in &updated {
        assert_eq!(item.amount, item.unit_price * Decimal::from(item.quantity));
    }
}
