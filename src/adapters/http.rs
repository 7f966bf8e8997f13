use crate::domain::ports::ConstantSource;
use crate::utils::error::{Result, SiteError};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Reads datasets from the constants API as `{endpoint}/{key}.json`.
#[derive(Debug, Clone)]
pub struct HttpConstantSource {
    base: Url,
    client: Client,
}

impl HttpConstantSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last path segment unless it ends in '/'.
        let mut base = Url::parse(endpoint)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base, client })
    }

    pub fn dataset_url(&self, key: &str) -> Result<Url> {
        Ok(self.base.join(&format!("{}.json", key))?)
    }
}

impl ConstantSource for HttpConstantSource {
    async fn fetch_raw(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let url = self.dataset_url(key)?;
        tracing::debug!("Fetching dataset from: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Dataset '{}' response status: {}", key, response.status());
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(SiteError::UnexpectedStatus {
                key: key.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}
