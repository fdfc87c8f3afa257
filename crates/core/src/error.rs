use crate::version::ApiVersion;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A ticket failed its schema check. Tickets are only ever produced by
    /// the generator or read back from the store, so this is a server fault.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested API version has no credential configured.
    #[error("API version {0} is not configured or is currently disabled")]
    VersionDisabled(ApiVersion),
}
