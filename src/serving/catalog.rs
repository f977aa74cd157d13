use serde::Deserialize;

/// Version state string the serving side uses for a loadable model.
pub const STATE_AVAILABLE: &str = "AVAILABLE";

/// One entry of the server's model status report.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionStatus {
    pub version: String,
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelStatusResponse {
    pub model_version_status: Vec<VersionStatus>,
}

/// The cluster counts the server will accept, derived from the model's
/// version list. Each cluster count is served as its own model version, so
/// "version 4" means "clustering into 4 clusters".
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    options: Vec<CountOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOption {
    pub count: u32,
    pub available: bool,
}

impl ModelCatalog {
    pub fn from_status(status: ModelStatusResponse) -> Self {
        let mut options: Vec<CountOption> = status
            .model_version_status
            .iter()
            .filter_map(|entry| {
                // non-numeric versions cannot name a cluster count
                let count = entry.version.parse::<u32>().ok()?;
                Some(CountOption {
                    count,
                    available: entry.state == STATE_AVAILABLE,
                })
            })
            .collect();
        options.sort_by_key(|option| option.count);
        Self { options }
    }

    pub fn options(&self) -> &[CountOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn is_available(&self, count: u32) -> bool {
        self.options
            .iter()
            .any(|option| option.count == count && option.available)
    }

    /// Highest available count, the fallback when a selection disappears.
    pub fn default_count(&self) -> Option<u32> {
        self.options
            .iter()
            .rev()
            .find(|option| option.available)
            .map(|option| option.count)
    }
}
