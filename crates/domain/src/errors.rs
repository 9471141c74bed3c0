use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid unblock reason: {0}")]
    InvalidReason(String),

    #[error("Invalid grant duration: {0}")]
    InvalidDuration(String),

    #[error("Site not found: {0}")]
    SiteNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Alarm error: {0}")]
    AlarmError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
