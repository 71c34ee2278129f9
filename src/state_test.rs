use super::*;

#[tokio::test]
async fn store_new_is_empty() {
    let store = FurnitureStore::new();
    assert!(store.snapshot().await.is_empty());
    assert!(store.get("anything").await.is_none());
}

#[test]
fn record_default_has_no_fields() {
    let rec = FurnitureRecord::default();
    assert!(rec.x.is_none());
    assert!(rec.y.is_none());
    assert!(rec.angle.is_none());
    assert!(rec.color.is_none());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn record_omits_unset_fields() {
    let rec = FurnitureRecord { x: Some(10.0), y: Some(20.0), ..Default::default() };
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json, serde_json::json!({"x": 10, "y": 20}));
}

#[test]
fn record_blank_serializes_to_empty_object() {
    let json = serde_json::to_string(&FurnitureRecord::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn record_keeps_zero_values() {
    let rec = FurnitureRecord { x: Some(0.0), y: Some(0.0), angle: Some(0.0), color: None };
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json, serde_json::json!({"x": 0, "y": 0, "angle": 0}));
}

#[test]
fn record_whole_numbers_serialize_as_integers() {
    let rec = FurnitureRecord { x: Some(10.0), y: Some(-20.0), angle: Some(45.0), color: None };
    assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"x":10,"y":-20,"angle":45}"#);
}

#[test]
fn record_fractional_numbers_keep_fraction() {
    let rec = FurnitureRecord { x: Some(7.25), y: Some(-3.5), angle: Some(1e20), color: None };
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["x"], serde_json::json!(7.25));
    assert_eq!(json["y"], serde_json::json!(-3.5));
    assert_eq!(json["angle"], serde_json::json!(1e20));
}

#[test]
fn record_deserializes_partial_object() {
    let rec: FurnitureRecord = serde_json::from_str(r#"{"color":"red"}"#).unwrap();
    assert_eq!(rec.color.as_deref(), Some("red"));
    assert!(rec.x.is_none());
}

// =============================================================================
// Upsert
// =============================================================================

#[tokio::test]
async fn upsert_with_creates_missing_record() {
    let store = FurnitureStore::new();
    let rec = store.upsert_with("sofa", |r| r.angle = Some(45.0)).await;
    assert_eq!(rec.angle, Some(45.0));
    assert!(rec.x.is_none());
    assert_eq!(store.snapshot().await.len(), 1);
    assert_eq!(store.get("sofa").await, Some(rec));
}

#[tokio::test]
async fn upsert_with_mutates_existing_record_in_place() {
    let store = FurnitureStore::new();
    store.upsert_with("sofa", |r| r.color = Some("blue".into())).await;
    let rec = store.upsert_with("sofa", |r| r.angle = Some(180.0)).await;
    assert_eq!(rec.color.as_deref(), Some("blue"));
    assert_eq!(rec.angle, Some(180.0));
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn clones_share_the_same_map() {
    let store = FurnitureStore::new();
    let other = store.clone();
    store.upsert_with("lamp", |r| r.x = Some(1.0)).await;
    assert!(other.get("lamp").await.is_some());
}

#[tokio::test]
async fn separate_app_states_are_isolated() {
    let a = test_helpers::test_app_state();
    let b = test_helpers::test_app_state();
    test_helpers::seed_record(&a, "desk", test_helpers::dummy_record()).await;
    assert_eq!(a.furniture.snapshot().await.len(), 1);
    assert!(b.furniture.snapshot().await.is_empty());
}

#[tokio::test]
async fn snapshot_is_detached_from_later_writes() {
    let state = test_helpers::test_app_state();
    test_helpers::seed_record(&state, "desk", test_helpers::dummy_record()).await;
    let snap = state.furniture.snapshot().await;
    state.furniture.upsert_with("chair", |r| r.x = Some(5.0)).await;
    assert_eq!(snap.len(), 1);
    assert_eq!(state.furniture.snapshot().await.len(), 2);
}
