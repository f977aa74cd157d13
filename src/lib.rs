// Public API exports
pub mod config;
pub mod geometry;
pub mod identity;
pub mod renderer;
pub mod serving;
pub mod session;
pub mod store;

// Re-export main types for convenience
pub use config::Config;

pub use geometry::{
    random_points, DataPoint, Projection, SurfaceSize, DATA_MAX, DATA_MIN, PADDING,
};

pub use store::{ClusterAssignment, ClusterResult, PointStore, ResultStore};

pub use identity::{reconcile, IdentityMap};

pub use serving::{
    ClusteringClient, CountOption, ModelCatalog, PredictRequest, PredictResponse, ServingError,
    MAX_POINTS_PER_REQUEST,
};

pub use session::{ClusterSession, SessionState, DEFAULT_CLUSTER_COUNT, MIN_POINTS_FOR_CLUSTERING};

pub use renderer::{render, DrawCommand, NEUTRAL, PALETTE};
