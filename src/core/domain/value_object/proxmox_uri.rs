use crate::core::domain::{
    error::ValidationError,
    value_object::{ProxmoxHost, ProxmoxPort},
};
use url::Url;

const MAX_URL_LENGTH: usize = 2083;
const API_ROOT: &str = "api2/json";

/// The validated base URL of a Proxmox VE API endpoint (e.g. `https://pve1:8006/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxUrl(Url);

impl ProxmoxUrl {
    /// Creates a new URL without validation (test fixtures pointing at mock servers).
    #[cfg(test)]
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(Url::parse(&url).expect("ProxmoxUrl::new_unchecked called with an invalid URL"))
    }

    /// Builds the base URL from its validated parts.
    pub(crate) fn from_parts(
        host: &ProxmoxHost,
        port: &ProxmoxPort,
        secure: bool,
    ) -> Result<Self, ValidationError> {
        let scheme = if secure { "https" } else { "http" };
        let url = format!("{}://{}:{}/", scheme, host.as_authority(), port.get());
        validate_url(&url)?;
        Url::parse(&url)
            .map(Self)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolves an API path (relative to `/api2/json/`) with optional query parameters.
    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.0.clone();
        let base = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!(
            "{}/{}/{}",
            base,
            API_ROOT,
            path.trim_start_matches('/')
        ));
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }
}

/// Validates a base URL: parseable, http(s) and of reasonable length.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !matches!(parsed.scheme(), "https" | "http") {
        return Err(ValidationError::ConstraintViolation(
            "Invalid scheme. Must be one of: https, http".to_string(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(ValidationError::Format("URL has no host".to_string()));
    }

    Ok(())
}
