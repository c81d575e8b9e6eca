//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    /// The state stack has no active state. Dispatching into an empty stack
    /// is a contract violation by the host, surfaced as a distinct error
    /// rather than undefined behavior.
    #[error("Empty state stack: no active state")]
    EmptyStateStack,

    #[error("Surface creation failed: {0}")]
    SurfaceCreation(String),

    #[error("No compatible GPU adapter found")]
    AdapterNotFound,

    #[error("Device creation failed: {0}")]
    DeviceCreation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;
