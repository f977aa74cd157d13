use crate::geometry::DataPoint;

/// Ordered collection of the session's data-space points.
///
/// Append-only within a session; the only removal is a full clear. Everything
/// downstream refers to points by their index here.
#[derive(Debug, Default)]
pub struct PointStore {
    points: Vec<DataPoint>,
}

impl PointStore {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn append(&mut self, point: DataPoint) {
        self.points.push(point.rounded());
    }

    /// Bulk append, used for random point generation.
    pub fn append_batch(&mut self, batch: impl IntoIterator<Item = DataPoint>) {
        self.points.extend(batch.into_iter().map(DataPoint::rounded));
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn all(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
