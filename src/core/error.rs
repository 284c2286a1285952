//! Error types for the application.
//!
//! Each domain degrades independently, so none of these reach the user
//! directly:
//!
//! - [`AnimationError`] - smooth-scroll / scroll-trigger engine failures
//! - [`DeliveryError`] - contact message delivery failures
//! - [`ContentError`] - bundled content table failures

use thiserror::Error;

/// Animation engine errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// A required engine global is missing (script failed to load)
    #[error("animation engine unavailable: {0}")]
    EngineUnavailable(&'static str),
    /// A binding target is not in the document
    #[error("element not found: {0}")]
    MissingElement(String),
    /// A call into the engine threw
    #[error("engine call failed: {0}")]
    CallFailed(String),
    /// Tween options could not be converted to a JS object
    #[error("failed to encode tween options: {0}")]
    Encode(String),
}

/// Contact message delivery errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// No response within the submission deadline
    #[error("delivery timed out")]
    Timeout,
    /// Request could not be sent (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// Endpoint answered with a non-2xx status
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Message could not be encoded
    #[error("failed to encode message: {0}")]
    Encode(String),
    /// Collaborator refused the message
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Content table errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content table parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
