//! Deterministic SKU candidate generation.
//!
//! Catalog identifiers follow the `NAME-THICKNESS-SIZE-MATERIAL` convention.
//! Given the four spec fields of a line item this module rebuilds the
//! identifier the catalog would have assigned, so rows entered by hand can
//! still be linked to their product.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from SKU candidate generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkuError {
    /// One of the four spec fields is empty or a placeholder dash.
    #[error("cannot build a SKU candidate: {0} is missing")]
    IncompleteSpec(&'static str),
}

/// Alternate spellings of pipe schedule designations, keyed by their
/// uppercased input form.
static THICKNESS_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("S/10S", "S10S"),
        ("SCH10S", "S10S"),
        ("SCH10", "S10S"),
        ("S/20S", "S20S"),
        ("SCH20S", "S20S"),
        ("SCH20", "S20S"),
        ("S/40S", "S40S"),
        ("SCH40S", "S40S"),
        ("SCH40", "S40S"),
        ("STD", "S40S"),
        ("S/80S", "S80S"),
        ("SCH80S", "S80S"),
        ("SCH80", "S80S"),
        ("XS", "S80S"),
        ("S/160", "S160"),
        ("SCH160", "S160"),
    ])
});

/// Canonical thickness designation: trimmed, uppercased, schedule aliases
/// collapsed. Unknown designations (plate thicknesses like `10T`, or the
/// literal `XX-S`) pass through unchanged.
pub fn format_thickness(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    match THICKNESS_ALIASES.get(upper.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => upper,
    }
}

/// Canonical size designation: trimmed, uppercased, with every `x` or `*`
/// dimension separator rewritten as ` X `.
pub fn format_size(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let segments: Vec<&str> = upper
        .split(['X', '*'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() <= 1 {
        return upper;
    }
    segments.join(" X ")
}

/// Build the catalog identifier a product with these spec fields would
/// carry: `NAME-THICKNESS-SIZE-MATERIAL` with thickness and size in their
/// canonical forms. Name and material are joined as typed; lookups fall
/// back to a normalized comparison anyway.
///
/// Fails when any field is blank or the `-` placeholder, since a partial
/// identifier would collide with unrelated products.
pub fn generate_candidate_id(
    name: &str,
    thickness: &str,
    size: &str,
    material: &str,
) -> Result<String, SkuError> {
    let name = required(name, "name")?;
    let thickness = required(thickness, "thickness")?;
    let size = required(size, "size")?;
    let material = required(material, "material")?;

    Ok(format!(
        "{}-{}-{}-{}",
        name,
        format_thickness(thickness),
        format_size(size),
        material
    ))
}

/// Spec fields recovered from a `NAME-THICKNESS-SIZE-MATERIAL` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFields {
    pub name: String,
    pub thickness: String,
    pub size: String,
    pub material: String,
}

/// Split a catalog identifier back into its spec fields. Materials may
/// themselves contain dashes, so everything past the third dash belongs to
/// the material. Returns `None` for identifiers with fewer than four parts.
pub fn parse_candidate_id(id: &str) -> Option<SpecFields> {
    let parts: Vec<&str> = id.split('-').collect();
    if parts.len() < 4 {
        return None;
    }
    Some(SpecFields {
        name: parts[0].to_string(),
        thickness: parts[1].to_string(),
        size: parts[2].to_string(),
        material: parts[3..].join("-"),
    })
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, SkuError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Err(SkuError::IncompleteSpec(field));
    }
    Ok(trimmed)
}
