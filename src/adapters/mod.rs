// Adapters layer: concrete constant sources for the render layer.

pub mod http;
pub mod local;

pub use http::HttpConstantSource;
pub use local::LocalConstantSource;

use crate::domain::ports::{ConfigProvider, ConstantSource};
use crate::utils::error::{Result, SiteError};
use std::time::Duration;

/// The configured source, chosen once at startup.
#[derive(Debug, Clone)]
pub enum AnySource {
    Http(HttpConstantSource),
    Local(LocalConstantSource),
}

impl AnySource {
    /// A local data directory wins over an endpoint when both are set.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        if let Some(dir) = config.data_dir() {
            tracing::info!("Reading datasets from directory: {}", dir);
            return Ok(AnySource::Local(LocalConstantSource::new(dir)));
        }
        if let Some(endpoint) = config.endpoint() {
            tracing::info!("Reading datasets from API: {}", endpoint);
            let timeout = Duration::from_secs(config.timeout_seconds());
            return Ok(AnySource::Http(HttpConstantSource::new(endpoint, timeout)?));
        }
        Err(SiteError::MissingConfigError {
            field: "source.endpoint or source.directory".to_string(),
        })
    }
}

impl ConstantSource for AnySource {
    async fn fetch_raw(&self, key: &str) -> Result<Option<serde_json::Value>> {
        match self {
            AnySource::Http(source) => source.fetch_raw(key).await,
            AnySource::Local(source) => source.fetch_raw(key).await,
        }
    }
}
