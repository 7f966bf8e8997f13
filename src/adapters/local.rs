use crate::domain::ports::ConstantSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Reads datasets from `{dir}/{key}.json`; a missing file is a missing dataset.
#[derive(Debug, Clone)]
pub struct LocalConstantSource {
    base_path: PathBuf,
}

impl LocalConstantSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ConstantSource for LocalConstantSource {
    async fn fetch_raw(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let full_path = self.base_path.join(format!("{}.json", key));
        tracing::debug!("Reading dataset from: {}", full_path.display());

        let data = match tokio::fs::read(&full_path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }
}
