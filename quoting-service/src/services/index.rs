//! In-memory catalog index.
//!
//! Two lookup maps over one catalog snapshot: product ids (raw and
//! normalized) and composite spec keys. Rebuilt only when the snapshot
//! revision changes; see [`IndexCache`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{CatalogSnapshot, Product};
use crate::services::normalize::{normalize, spec_key};

/// What to do when two products normalize to the same spec key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep the product indexed first. Matches the first-match-wins rule
    /// used everywhere else in the cascade.
    #[default]
    KeepFirst,
    /// Keep the product indexed last.
    KeepLast,
}

/// Lookup maps over one catalog snapshot.
///
/// The maps store positions into the snapshot's product list, so an index
/// is only ever valid for the snapshot it was built from.
pub struct CatalogIndex {
    snapshot: Arc<CatalogSnapshot>,
    by_id: HashMap<String, usize>,
    by_spec: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Index every product in the snapshot.
    ///
    /// Each product lands in the id map twice (raw and normalized id) and in
    /// the spec map once. Spec key collisions are resolved by `policy` and
    /// logged either way.
    pub fn build(snapshot: Arc<CatalogSnapshot>, policy: CollisionPolicy) -> Self {
        let mut by_id = HashMap::with_capacity(snapshot.products.len() * 2);
        let mut by_spec: HashMap<String, usize> = HashMap::with_capacity(snapshot.products.len());

        for (pos, product) in snapshot.products.iter().enumerate() {
            by_id.insert(product.id.clone(), pos);
            by_id.insert(normalize(&product.id), pos);

            let key = spec_key(
                &product.name,
                &product.thickness,
                &product.size,
                &product.material,
            );
            if let Some(&existing) = by_spec.get(&key) {
                warn!(
                    spec_key = %key,
                    existing = %snapshot.products[existing].id,
                    incoming = %product.id,
                    policy = ?policy,
                    "duplicate spec key in catalog"
                );
                if policy == CollisionPolicy::KeepLast {
                    by_spec.insert(key, pos);
                }
            } else {
                by_spec.insert(key, pos);
            }
        }

        debug!(
            revision = snapshot.revision,
            products = snapshot.products.len(),
            ids = by_id.len(),
            specs = by_spec.len(),
            "catalog index built"
        );

        Self {
            snapshot,
            by_id,
            by_spec,
        }
    }

    /// Product by identifier: raw form first, normalized form second.
    pub fn lookup_id(&self, id: &str) -> Option<&Product> {
        let pos = self
            .by_id
            .get(id)
            .or_else(|| self.by_id.get(&normalize(id)))?;
        self.snapshot.products.get(*pos)
    }

    /// Product by the normalized composite key over the four spec fields.
    pub fn lookup_spec(
        &self,
        name: &str,
        thickness: &str,
        size: &str,
        material: &str,
    ) -> Option<&Product> {
        let key = spec_key(name, thickness, size, material);
        let pos = self.by_spec.get(&key)?;
        self.snapshot.products.get(*pos)
    }

    /// Revision of the snapshot this index was built from.
    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    /// The snapshot this index was built from.
    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.snapshot.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.products.is_empty()
    }
}

/// Memoized index builder.
///
/// Holds on to the last built index and reuses it for as long as callers
/// keep passing snapshots with the same revision.
pub struct IndexCache {
    policy: CollisionPolicy,
    current: Option<CatalogIndex>,
}

impl IndexCache {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            current: None,
        }
    }

    /// Index for `snapshot`, rebuilding only when the revision changed.
    pub fn index_for(&mut self, snapshot: &Arc<CatalogSnapshot>) -> &CatalogIndex {
        if self
            .current
            .as_ref()
            .is_some_and(|index| index.revision() != snapshot.revision)
        {
            debug!(revision = snapshot.revision, "catalog revision changed");
            self.current = None;
        }
        self.current
            .get_or_insert_with(|| CatalogIndex::build(Arc::clone(snapshot), self.policy))
    }
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new(CollisionPolicy::default())
    }
}
