//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the furniture store: one process-wide map from furniture id to
//! its placement record. Every mutation takes the write lock for the whole
//! map, so a single move/rotate/color update is never observed half-applied.
//! Nothing is persisted; the map lives exactly as long as the process.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};
use tokio::sync::RwLock;

// =============================================================================
// FURNITURE RECORD
// =============================================================================

/// Placement and appearance of one furniture item.
///
/// Fields that were never written stay `None` and are omitted from JSON.
/// Whole-valued numbers serialize as JSON integers (`10`, not `10.0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FurnitureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_number")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_number")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_number")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INTEGER => serializer.serialize_i64(v as i64),
        Some(v) => serializer.serialize_f64(v),
        None => serializer.serialize_none(),
    }
}

// =============================================================================
// FURNITURE STORE
// =============================================================================

/// Snapshot of every record, keyed by furniture id.
pub type FurnitureMap = HashMap<String, FurnitureRecord>;

/// Cloneable handle to the furniture map. All clones share the same map.
#[derive(Clone, Default)]
pub struct FurnitureStore {
    records: Arc<RwLock<FurnitureMap>>,
}

impl FurnitureStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `f` to the record for `id`, inserting a blank record first if
    /// the id is unseen. Returns a copy of the record after `f` ran.
    pub async fn upsert_with<F>(&self, id: &str, f: F) -> FurnitureRecord
    where
        F: FnOnce(&mut FurnitureRecord),
    {
        let mut records = self.records.write().await;
        let record = records.entry(id.to_owned()).or_default();
        f(record);
        record.clone()
    }

    pub async fn get(&self, id: &str) -> Option<FurnitureRecord> {
        self.records.read().await.get(id).cloned()
    }

    pub async fn snapshot(&self) -> FurnitureMap {
        self.records.read().await.clone()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is an Arc-backed handle.
#[derive(Clone, Default)]
pub struct AppState {
    pub furniture: FurnitureStore,
}

impl AppState {
    #[must_use]
    pub fn new(furniture: FurnitureStore) -> Self {
        Self { furniture }
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
