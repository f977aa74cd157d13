// Session orchestration: owns the point set, the latest clustering snapshot,
// the identity mapping, and the drawing surface.

#[cfg(test)]
mod tests;

use log::{info, warn};

use crate::geometry::{DataPoint, Projection, SurfaceSize};
use crate::identity::{reconcile, IdentityMap};
use crate::renderer::{render, DrawCommand};
use crate::serving::{ClusteringClient, ModelCatalog, PredictResponse, ServingError};
use crate::store::{ClusterAssignment, ClusterResult, PointStore, ResultStore};

/// Clustering a single point is degenerate; no request leaves the session
/// until the store reaches this many points.
pub const MIN_POINTS_FOR_CLUSTERING: usize = 2;

pub const DEFAULT_CLUSTER_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No points.
    Empty,
    /// Points exist but too few to cluster.
    Insufficient,
    /// A clustering request is in flight.
    Clustering,
    /// A result is on display.
    Ready,
}

/// One interactive visualization session.
///
/// All mutation flows one way: a point or parameter change triggers a
/// clustering request, the response updates the stores and the identity
/// mapping, and rendering derives a scene from whatever is currently held.
/// The render step never feeds back into session state.
pub struct ClusterSession {
    client: ClusteringClient,
    points: PointStore,
    result: ResultStore,
    identities: IdentityMap,
    /// Centroid list the current identity mapping was computed against.
    previous_centroids: Vec<DataPoint>,
    projection: Projection,
    catalog: ModelCatalog,
    cluster_count: u32,
    state: SessionState,
    last_error: Option<String>,
    /// Sequence number of the most recently issued request. A response is
    /// applied only while its number is still the latest, which makes
    /// last-write-wins deterministic when responses arrive out of order.
    seq: u64,
}

impl ClusterSession {
    pub fn new(client: ClusteringClient, surface: SurfaceSize) -> Self {
        Self {
            client,
            points: PointStore::new(),
            result: ResultStore::new(),
            identities: IdentityMap::empty(),
            previous_centroids: Vec::new(),
            projection: Projection::new(surface),
            catalog: ModelCatalog::default(),
            cluster_count: DEFAULT_CLUSTER_COUNT,
            state: SessionState::Empty,
            last_error: None,
            seq: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn cluster_count(&self) -> u32 {
        self.cluster_count
    }

    pub fn points(&self) -> &[DataPoint] {
        self.points.all()
    }

    pub fn result(&self) -> Option<&ClusterResult> {
        self.result.get()
    }

    pub fn identities(&self) -> &IdentityMap {
        &self.identities
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn surface(&self) -> SurfaceSize {
        self.projection.size()
    }

    /// Record a click at surface coordinates and recluster.
    pub async fn add_surface_point(&mut self, sx: f64, sy: f64) {
        let point = self.projection.to_data(sx, sy);
        self.add_point(point).await;
    }

    pub async fn add_point(&mut self, point: DataPoint) {
        self.points.append(point);
        self.recluster().await;
    }

    pub async fn add_points(&mut self, batch: Vec<DataPoint>) {
        if batch.is_empty() {
            return;
        }
        self.points.append_batch(batch);
        self.recluster().await;
    }

    /// Drop all points, the result, and the identity history. Bumping the
    /// sequence number makes any response still in flight land stale.
    pub fn clear(&mut self) {
        self.points.clear();
        self.result.clear();
        self.identities = IdentityMap::empty();
        self.previous_centroids.clear();
        self.last_error = None;
        self.seq += 1;
        self.state = SessionState::Empty;
    }

    /// Select a different cluster count and recluster the same point set.
    ///
    /// Old identities carry no meaning across a cardinality change, so the
    /// mapping reseeds on the next response. Returns false (and changes
    /// nothing) when a fetched catalog does not list the count as available;
    /// with no catalog fetched yet any count is accepted.
    pub async fn set_cluster_count(&mut self, count: u32) -> bool {
        if !self.catalog.is_empty() && !self.catalog.is_available(count) {
            warn!("cluster count {} is not served", count);
            return false;
        }
        if count == self.cluster_count {
            return true;
        }

        self.cluster_count = count;
        self.identities = IdentityMap::empty();
        self.previous_centroids.clear();
        self.recluster().await;
        true
    }

    /// Re-read the model catalog. If the selected count is no longer served,
    /// fall back to the highest available one.
    pub async fn refresh_catalog(&mut self) -> Result<(), ServingError> {
        let catalog = self.client.model_status().await?;
        self.catalog = catalog;

        if !self.catalog.is_available(self.cluster_count) {
            if let Some(fallback) = self.catalog.default_count() {
                info!(
                    "cluster count {} unavailable, falling back to {}",
                    self.cluster_count, fallback
                );
                self.cluster_count = fallback;
                self.identities = IdentityMap::empty();
                self.previous_centroids.clear();
            }
        }
        Ok(())
    }

    /// Adopt new surface pixel dimensions. Points and results are untouched.
    pub fn resize_surface(&mut self, size: SurfaceSize) {
        self.projection.resize(size);
    }

    /// Build the current scene. Never mutates session state.
    pub fn render(&self) -> Vec<DrawCommand> {
        render(
            self.points.all(),
            self.result.get(),
            &self.identities,
            self.projection.size(),
        )
    }

    async fn recluster(&mut self) {
        if self.points.len() < MIN_POINTS_FOR_CLUSTERING {
            self.state = self.settled_state();
            return;
        }

        let seq = self.next_seq();
        self.state = SessionState::Clustering;
        info!(
            "clustering request #{}: {} points, k={}",
            seq,
            self.points.len(),
            self.cluster_count
        );

        let outcome = self
            .client
            .predict(self.points.all(), self.cluster_count)
            .await;
        match outcome {
            Ok(response) => self.apply_response(seq, response),
            Err(err) => self.fail(err),
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Apply a clustering response unless a newer request or a clear has
    /// superseded it.
    fn apply_response(&mut self, seq: u64, response: PredictResponse) {
        if seq != self.seq {
            info!("discarding stale clustering response #{}", seq);
            return;
        }

        let result = ClusterResult {
            assignments: response
                .predictions
                .iter()
                .map(|p| ClusterAssignment {
                    cluster: p.cluster,
                    distance: p.distance,
                })
                .collect(),
            centroids: response
                .centroids
                .iter()
                .map(|c| DataPoint::new(c[0], c[1]))
                .collect(),
        };

        self.identities = reconcile(&self.identities, &self.previous_centroids, &result.centroids);
        self.previous_centroids = result.centroids.clone();
        self.result.set(result);
        self.last_error = None;
        self.state = SessionState::Ready;
    }

    /// A failed request keeps whatever was on display; only the error
    /// message changes. No automatic retry.
    fn fail(&mut self, err: ServingError) {
        warn!("clustering request failed: {}", err);
        self.last_error = Some(err.to_string());
        self.state = self.settled_state();
    }

    /// The state implied by currently held content.
    fn settled_state(&self) -> SessionState {
        if self.result.get().is_some() {
            SessionState::Ready
        } else if self.points.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Insufficient
        }
    }
}
