use std::time::Duration;

use log::debug;
use reqwest::Client;
use thiserror::Error;

use crate::geometry::DataPoint;

use super::catalog::{ModelCatalog, ModelStatusResponse};
use super::types::{PredictRequest, PredictResponse};

/// Hard cap the serving side enforces per request; checked here so an
/// oversized request never leaves the client.
pub const MAX_POINTS_PER_REQUEST: usize = 1000;

#[derive(Debug, Error)]
pub enum ServingError {
    #[error("model server unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("model server returned status {status}: {body}")]
    Server { status: u16, body: String },

    #[error("malformed model server response: {0}")]
    Response(#[source] reqwest::Error),

    #[error("too many points: {count} (max {MAX_POINTS_PER_REQUEST})")]
    TooManyPoints { count: usize },
}

pub struct ClusteringClient {
    http: Client,
    base_url: String,
    model_name: String,
}

impl ClusteringClient {
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self::with_timeout(base_url, model_name, Duration::from_secs(10))
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        model_name: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            model_name: model_name.into(),
        }
    }

    /// Request a clustering of `points` into `cluster_count` clusters.
    ///
    /// The cluster count selects the model version on the serving side, so
    /// every count the catalog lists is a separately served model.
    pub async fn predict(
        &self,
        points: &[DataPoint],
        cluster_count: u32,
    ) -> Result<PredictResponse, ServingError> {
        if points.len() > MAX_POINTS_PER_REQUEST {
            return Err(ServingError::TooManyPoints {
                count: points.len(),
            });
        }

        let request = PredictRequest {
            instances: points.iter().map(|p| [p.x, p.y]).collect(),
        };
        let url = format!(
            "{}/v1/models/{}/versions/{}:predict",
            self.base_url, self.model_name, cluster_count
        );
        debug!(
            "clustering request: {} points, k={}",
            points.len(),
            cluster_count
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(ServingError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServingError::Server {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(ServingError::Response)
    }

    /// Fetch the model's version list and availability states.
    pub async fn model_status(&self) -> Result<ModelCatalog, ServingError> {
        let url = format!("{}/v1/models/{}", self.base_url, self.model_name);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ServingError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServingError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ModelStatusResponse =
            response.json().await.map_err(ServingError::Response)?;
        Ok(ModelCatalog::from_status(parsed))
    }
}
