//! Error types for the Slate controller client.

use crate::reply::Reply;
use thiserror::Error;

/// Client-side error taxonomy.
///
/// Controller-reported failures on reply-bearing calls are *not* errors at
/// this level: they arrive as [`Reply`] values classified as Error and flow
/// through aggregation like any other reply. This enum covers everything
/// that prevents or interrupts a command before replies can be rendered.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The controller could not be reached on any configured endpoint.
    #[error("Controller unreachable: {0}")]
    Connection(String),

    /// Client-side input validation failed; no call was issued.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Configuration could not be loaded or is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The controller answered with a body the client cannot interpret.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A payload endpoint rejected the request with a reply-array body.
    /// The route renders the carried replies through normal aggregation.
    #[error("Controller rejected the request")]
    Controller(Vec<Reply>),

    /// Internal-consistency violation (e.g. a command yielded no replies).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}
