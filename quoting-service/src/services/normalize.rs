//! Key normalization for catalog lookups.
//!
//! Every index key and lookup key passes through the same canonical form so
//! that `" sts 304 "` and `"STS304"` land on the same product.

/// Canonical form of an identifier or spec field: all whitespace removed,
/// everything uppercased.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Composite lookup key over the four spec fields, each normalized, joined
/// with `|` in a fixed order.
pub fn spec_key(name: &str, thickness: &str, size: &str, material: &str) -> String {
    format!(
        "{}|{}|{}|{}",
        normalize(name),
        normalize(thickness),
        normalize(size),
        normalize(material)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace_and_uppercases() {
        assert_eq!(normalize(" sts 304 "), "STS304");
        assert_eq!(normalize("ELBOW 90"), "ELBOW90");
        assert_eq!(normalize("\tsch 40\n"), "SCH40");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(" Pipe a 10 ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_spec_key_field_order_is_fixed() {
        let key = spec_key("Elbow 90", "sch 40", "100 a", "sts 304");
        assert_eq!(key, "ELBOW90|SCH40|100A|STS304");
    }

    #[test]
    fn test_spec_key_differs_when_fields_swap() {
        let a = spec_key("A", "B", "C", "D");
        let b = spec_key("B", "A", "C", "D");
        assert_ne!(a, b);
    }
}
