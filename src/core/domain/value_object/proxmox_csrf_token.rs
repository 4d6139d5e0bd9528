use crate::core::domain::error::ValidationError;

/// A Proxmox CSRF protection token, sent back as the `CSRFPreventionToken` header.
#[derive(Debug, Clone)]
pub struct ProxmoxCSRFToken(String);

impl ProxmoxCSRFToken {
    /// Name of the request header carrying the token.
    pub const HEADER: &'static str = "CSRFPreventionToken";

    /// Creates a new CSRF token without validation.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates the format of a CSRF token string (`TOKENID:VALUE`).
pub(crate) fn validate_csrf_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "csrf_token".to_string(),
            message: "CSRF token cannot be empty".to_string(),
        });
    }
    let Some((id, value)) = token.split_once(':') else {
        return Err(ValidationError::Format(
            "CSRF token must be in format TOKENID:VALUE".to_string(),
        ));
    };
    if id.len() != 8 || !id.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::Format(
            "Token ID must be 8 hexadecimal characters".to_string(),
        ));
    }
    if value.is_empty() {
        return Err(ValidationError::Format(
            "CSRF token value cannot be empty".to_string(),
        ));
    }
    Ok(())
}
