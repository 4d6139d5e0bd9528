use crate::core::domain::error::ValidationError;

/// The realm used when none is given: local Linux PAM accounts.
pub const DEFAULT_REALM: &str = "pam";

/// A validated Proxmox authentication realm (e.g. `pam`, `pve`, or an LDAP/AD realm id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxRealm(String);

impl ProxmoxRealm {
    /// Creates a new realm without validation.
    pub(crate) fn new_unchecked(realm: String) -> Self {
        Self(realm)
    }

    /// Returns the realm as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a realm identifier.
///
/// Realm ids are user-defined for LDAP/AD/OpenID, so only the format is checked.
pub(crate) fn validate_realm(realm: &str) -> Result<(), ValidationError> {
    if realm.is_empty() {
        return Err(ValidationError::Field {
            field: "realm".to_string(),
            message: "Realm cannot be empty".to_string(),
        });
    }
    if realm.len() > 32 {
        return Err(ValidationError::Format(
            "Realm length must be between 1 and 32 characters".to_string(),
        ));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.';
    if !realm.chars().all(allowed) {
        return Err(ValidationError::Format(
            "Realm contains invalid characters".to_string(),
        ));
    }
    if !realm.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(ValidationError::Format(
            "Realm must start with a letter".to_string(),
        ));
    }
    Ok(())
}
