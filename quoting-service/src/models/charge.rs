//! Additional charge model for quoting-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ad-hoc charge appended to a document, such as freight or cutting.
/// A negative amount acts as a one-off allowance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCharge {
    pub name: String,
    pub amount: Decimal,
}
