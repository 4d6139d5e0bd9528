//! Client-side settings: input validation rules, session lifetime and rate limiting.

use std::time::Duration;

/// Proxmox VE tickets are valid for two hours.
pub const DEFAULT_TICKET_LIFETIME: Duration = Duration::from_secs(2 * 60 * 60);

/// Client-side request throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained requests per second.
    pub requests_per_second: u32,
    /// Requests allowed in a burst before throttling starts.
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// A limit of `requests_per_second` with an equal burst.
    pub fn per_second(requests_per_second: u32) -> Self {
        Self {
            requests_per_second,
            burst_size: requests_per_second,
        }
    }
}

/// Settings applied when a client is built and while it talks to the API.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// How long a ticket is trusted before the client logs in again.
    pub ticket_lifetime: Duration,
    /// Optional client-side rate limit; `None` sends requests as fast as they are issued.
    pub rate_limit: Option<RateLimitConfig>,
    /// Minimum zxcvbn strength required of the password, if any.
    pub password_min_score: Option<zxcvbn::Score>,
    /// Refuse well-known account names such as `root`.
    pub block_reserved_usernames: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            ticket_lifetime: DEFAULT_TICKET_LIFETIME,
            rate_limit: None,
            password_min_score: None,
            block_reserved_usernames: false,
        }
    }
}
