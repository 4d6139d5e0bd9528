use thiserror::Error;

/// The main error type for inventory operations.
///
/// This enum represents all possible errors that can occur while talking
/// to a Proxmox VE cluster, including connection, authentication,
/// validation and cancellation.
#[derive(Error, Debug)]
pub enum ProxmoxError {
    /// Represents errors that occur during connection attempts, HTTP failures
    /// and responses that cannot be parsed into the expected records
    ///
    /// # Fields
    /// * `0` - A description of what went wrong
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    /// The operation was interrupted through its cancellation token
    /// before it completed.
    #[error("Operation cancelled")]
    Cancelled,
}

impl ProxmoxError {
    /// Returns true if this error only reports a user interruption.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProxmoxError::Cancelled)
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a ProxmoxError
pub type ProxmoxResult<T> = Result<T, ProxmoxError>;
