//! Furniture service — partial updates and reads over the furniture store.
//!
//! DESIGN
//! ======
//! Each update owns a fixed subset of record fields (position: x and y,
//! rotation: angle, appearance: color). Inputs are validated before the
//! store is touched, so a rejected call never creates or mutates a record.
//! A valid call upserts: the record is created blank on first write, then
//! only the owned fields are overwritten.
//!
//! Presence is explicit. `Some(0.0)` is a real coordinate; only `None`
//! (field absent or `null` on the wire) counts as missing. Ids and colors
//! must additionally be non-empty.

use tracing::debug;

use crate::state::{AppState, FurnitureMap, FurnitureRecord};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FurnitureError {
    #[error("Missing id, x, or y")]
    MissingPosition,
    #[error("Missing id or angle")]
    MissingAngle,
    #[error("Missing id or color")]
    MissingColor,
    #[error("Furniture not found: {0}")]
    NotFound(String),
}

impl FurnitureError {
    /// Whether the caller supplied an incomplete request body.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MissingPosition | Self::MissingAngle | Self::MissingColor)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// UPDATES
// =============================================================================

/// Set the position of a furniture item, creating it if unseen.
///
/// # Errors
///
/// Returns `MissingPosition` if `id` is absent or empty, or if either
/// coordinate is absent.
pub async fn move_furniture(
    state: &AppState,
    id: Option<&str>,
    x: Option<f64>,
    y: Option<f64>,
) -> Result<FurnitureRecord, FurnitureError> {
    let (Some(id), Some(x), Some(y)) = (present(id), x, y) else {
        return Err(FurnitureError::MissingPosition);
    };

    let record = state
        .furniture
        .upsert_with(id, |r| {
            r.x = Some(x);
            r.y = Some(y);
        })
        .await;

    debug!(%id, x, y, "furniture moved");
    Ok(record)
}

/// Set the rotation of a furniture item, creating it if unseen.
///
/// # Errors
///
/// Returns `MissingAngle` if `id` is absent or empty, or `angle` is absent.
pub async fn rotate_furniture(
    state: &AppState,
    id: Option<&str>,
    angle: Option<f64>,
) -> Result<FurnitureRecord, FurnitureError> {
    let (Some(id), Some(angle)) = (present(id), angle) else {
        return Err(FurnitureError::MissingAngle);
    };

    let record = state.furniture.upsert_with(id, |r| r.angle = Some(angle)).await;

    debug!(%id, angle, "furniture rotated");
    Ok(record)
}

/// Set the color of a furniture item, creating it if unseen.
///
/// # Errors
///
/// Returns `MissingColor` if `id` or `color` is absent or empty.
pub async fn set_color(
    state: &AppState,
    id: Option<&str>,
    color: Option<&str>,
) -> Result<FurnitureRecord, FurnitureError> {
    let (Some(id), Some(color)) = (present(id), present(color)) else {
        return Err(FurnitureError::MissingColor);
    };

    let record = state
        .furniture
        .upsert_with(id, |r| r.color = Some(color.to_owned()))
        .await;

    debug!(%id, %color, "furniture recolored");
    Ok(record)
}

// =============================================================================
// READS
// =============================================================================

/// Snapshot every record currently in the store.
pub async fn list_furniture(state: &AppState) -> FurnitureMap {
    state.furniture.snapshot().await
}

/// Fetch one record by id.
///
/// # Errors
///
/// Returns `NotFound` if no update has ever been applied to `id`.
pub async fn get_furniture(state: &AppState, id: &str) -> Result<FurnitureRecord, FurnitureError> {
    state
        .furniture
        .get(id)
        .await
        .ok_or_else(|| FurnitureError::NotFound(id.to_owned()))
}

#[cfg(test)]
#[path = "furniture_test.rs"]
mod tests;
