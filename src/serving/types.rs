// the model-serving contract
use serde::{Deserialize, Serialize};

/// Body for a `:predict` call, one `[x, y]` instance per point in request
/// order.
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<[f64; 2]>,
}

/// Per-point prediction, same order as the request instances.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointPrediction {
    /// Positional index into [`PredictResponse::centroids`].
    pub cluster: usize,
    /// Distance from the point to its assigned centroid.
    pub distance: f64,
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<PointPrediction>,
    /// One `[x, y]` per cluster, ordered by positional index.
    pub centroids: Vec<[f64; 2]>,
}
