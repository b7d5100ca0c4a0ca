//! Services module for quoting-service.

pub mod enrich;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod pricing;
pub mod sku;
pub mod totals;

pub use enrich::{enrich, enrich_all};
pub use index::{CatalogIndex, CollisionPolicy, IndexCache};
pub use matcher::{match_item, resolve, MatchResult};
pub use normalize::{normalize, spec_key};
pub use pricing::{implied_rate, round_to_ten, PriceBasis, PriceReconciler, RateLane};
pub use sku::{generate_candidate_id, parse_candidate_id, SkuError, SpecFields};
pub use totals::{document_totals, supplier_totals, DocumentTotals, SupplierTotals};
