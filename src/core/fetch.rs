use crate::domain::ports::ConstantSource;
use serde::de::DeserializeOwned;

/// Fetches and decodes a dataset. Any failure is logged and reported as
/// `None`, the same as a dataset that does not exist.
pub async fn fetch_constant<T, S>(source: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: ConstantSource,
{
    let value = match source.fetch_raw(key).await {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::info!("Dataset '{}' is not available", key);
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to fetch dataset '{}': {}", key, e);
            return None;
        }
    };

    if value.is_null() {
        tracing::info!("Dataset '{}' is null", key);
        return None;
    }

    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Dataset '{}' has an unexpected shape: {}", key, e);
            None
        }
    }
}
