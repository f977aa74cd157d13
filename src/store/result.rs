use crate::geometry::DataPoint;

/// One point's assignment in a clustering response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterAssignment {
    /// Index into the response's centroid list. Not stable across calls.
    pub cluster: usize,
    /// Distance from the point to its assigned centroid.
    pub distance: f64,
}

/// A full clustering snapshot: one assignment per request point, in request
/// order, plus the ordered centroid list the assignments index into.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    pub assignments: Vec<ClusterAssignment>,
    pub centroids: Vec<DataPoint>,
}

/// Holds at most one snapshot, replaced wholesale on every response.
#[derive(Debug, Default)]
pub struct ResultStore {
    snapshot: Option<ClusterResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    pub fn set(&mut self, result: ClusterResult) {
        self.snapshot = Some(result);
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    pub fn get(&self) -> Option<&ClusterResult> {
        self.snapshot.as_ref()
    }

    /// True when the snapshot covers exactly `point_count` points.
    ///
    /// Between a point mutation and the next response the snapshot lags the
    /// point set; consumers must treat that window as "no result" rather than
    /// index past the assignment list.
    pub fn is_consistent_with(&self, point_count: usize) -> bool {
        match &self.snapshot {
            Some(result) => result.assignments.len() == point_count,
            None => false,
        }
    }
}
