use crate::utils::error::Result;

/// Where pre-aggregated datasets ("constants") come from.
///
/// `Ok(None)` means the dataset does not exist; errors are transport or
/// decoding failures. Callers in the render layer never see the difference.
pub trait ConstantSource: Send + Sync {
    fn fetch_raw(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> Option<&str>;
    fn data_dir(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}
