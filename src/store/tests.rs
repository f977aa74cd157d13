use super::*;
use crate::geometry::DataPoint;

#[test]
fn test_append_preserves_order() {
    let mut store = PointStore::new();
    store.append(DataPoint::new(1.0, 2.0));
    store.append_batch(vec![DataPoint::new(3.0, 4.0), DataPoint::new(5.0, 6.0)]);

    assert_eq!(store.len(), 3);
    assert_eq!(store.all()[0], DataPoint::new(1.0, 2.0));
    assert_eq!(store.all()[2], DataPoint::new(5.0, 6.0));
}

#[test]
fn test_append_rounds_to_wire_grid() {
    let mut store = PointStore::new();
    store.append(DataPoint::new(1.2345, -9.8765));

    assert_eq!(store.all()[0], DataPoint::new(1.23, -9.88));
}

#[test]
fn test_clear_empties_store() {
    let mut store = PointStore::new();
    store.append_batch(vec![DataPoint::new(0.0, 0.0); 5]);
    assert!(!store.is_empty());

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

fn snapshot(points: usize, clusters: usize) -> ClusterResult {
    ClusterResult {
        assignments: (0..points)
            .map(|i| ClusterAssignment {
                cluster: i % clusters,
                distance: 1.0,
            })
            .collect(),
        centroids: (0..clusters)
            .map(|i| DataPoint::new(i as f64, i as f64))
            .collect(),
    }
}

#[test]
fn test_result_store_replaces_wholesale() {
    let mut store = ResultStore::new();
    assert!(store.get().is_none());

    store.set(snapshot(5, 3));
    assert_eq!(store.get().unwrap().assignments.len(), 5);

    store.set(snapshot(2, 2));
    assert_eq!(store.get().unwrap().assignments.len(), 2);

    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn test_consistency_check() {
    let mut store = ResultStore::new();
    assert!(!store.is_consistent_with(0));

    store.set(snapshot(5, 3));
    assert!(store.is_consistent_with(5));
    // a 6th point was added but the response has not arrived yet
    assert!(!store.is_consistent_with(6));
    assert!(!store.is_consistent_with(4));
}
