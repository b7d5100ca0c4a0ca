//! Domain models for quoting-service.

mod charge;
mod line_item;
mod product;

pub use charge::AdditionalCharge;
pub use line_item::{
    parse_line_items, CostBreakdown, EnrichedLineItem, LineItem, RawLineItem,
};
pub use product::{CatalogSnapshot, Product, StockStatus};
