use crate::utils::error::{Result, SiteError};
use url::Url;

const MAX_TIMEOUT_SECONDS: u64 = 300;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> SiteError {
    SiteError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

// A `${VAR}` left behind by substitution means the variable was unset.
fn reject_unresolved(field: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(invalid(field, value, "references an unset environment variable"));
    }
    Ok(())
}

/// The constants endpoint: an http(s) base URL that dataset keys are joined onto.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    reject_unresolved(field, endpoint)?;

    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("Invalid URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            endpoint,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, endpoint, "URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field,
            endpoint,
            "dataset keys are appended to the path; remove the query or fragment",
        ));
    }
    Ok(())
}

pub fn validate_data_dir(field: &str, dir: &str) -> Result<()> {
    if dir.trim().is_empty() {
        return Err(invalid(field, dir, "Directory cannot be empty"));
    }
    reject_unresolved(field, dir)
}

pub fn validate_timeout(field: &str, seconds: u64) -> Result<()> {
    if !(1..=MAX_TIMEOUT_SECONDS).contains(&seconds) {
        return Err(invalid(
            field,
            seconds,
            format!("Timeout must be between 1 and {} seconds", MAX_TIMEOUT_SECONDS),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}
