use crate::core::domain::error::ValidationError;
use std::time::{Duration, SystemTime};

/// A Proxmox authentication ticket (`PVEAuthCookie`).
#[derive(Debug, Clone)]
pub struct ProxmoxTicket {
    value: String,
    issued_at: SystemTime,
}

impl ProxmoxTicket {
    /// Creates a new ticket without validation, stamped with the current time.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self::issued_at(value, SystemTime::now())
    }

    pub(crate) fn issued_at(value: String, issued_at: SystemTime) -> Self {
        Self { value, issued_at }
    }

    /// Returns the ticket value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Checks if the ticket is older than the given lifetime.
    #[must_use]
    pub fn is_expired(&self, lifetime: Duration) -> bool {
        self.issued_at
            .elapsed()
            .map(|age| age > lifetime)
            .unwrap_or(true)
    }

    /// Formats the ticket as a cookie header value.
    #[must_use]
    pub fn as_cookie_header(&self) -> String {
        format!("PVEAuthCookie={}", self.value)
    }
}

/// Validates the format of a ticket string (`PVE:<user>@<realm>:<hex>::<signature>`).
pub(crate) fn validate_ticket(ticket: &str) -> Result<(), ValidationError> {
    if ticket.is_empty() {
        return Err(ValidationError::Field {
            field: "ticket".to_string(),
            message: "Ticket cannot be empty".to_string(),
        });
    }
    let parts: Vec<&str> = ticket.split(':').collect();
    if parts.len() < 5 || parts[0] != "PVE" {
        return Err(ValidationError::Format(
            "Invalid ticket format: must start with 'PVE:' and have at least 5 parts".to_string(),
        ));
    }
    Ok(())
}
