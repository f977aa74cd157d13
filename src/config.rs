// Environment-driven settings, CLUSTERVIEW_ prefix.

use std::env;

pub const DEFAULT_SERVING_URL: &str = "http://localhost:8501";
pub const DEFAULT_MODEL_NAME: &str = "kmeans";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the model server.
    pub serving_url: String,
    /// Name the clustering model is served under.
    pub model_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            serving_url: env::var("CLUSTERVIEW_SERVING_URL")
                .unwrap_or_else(|_| DEFAULT_SERVING_URL.to_string()),
            model_name: env::var("CLUSTERVIEW_MODEL_NAME")
                .unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
        }
    }
}
