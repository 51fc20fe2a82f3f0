//! Error types for pubsub-gapic.

use std::time::Duration;
use thiserror::Error;

/// Result type for pubsub-gapic operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pubsub-gapic.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller misused the API; nothing was sent over the network.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mutual TLS channel could not be configured.
    #[error("Mutual TLS error: {0}")]
    MutualTls(String),

    /// Credential resolution failed.
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Channel construction failed.
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// The remote call failed with a terminal status.
    #[error("RPC error: {0}")]
    Rpc(#[from] tonic::Status),

    /// The client-side deadline elapsed before the call completed.
    #[error("Deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// The gRPC status carried by an RPC error.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Error::Rpc(status) => Some(status),
            _ => None,
        }
    }

    /// The gRPC code of this error, if it came from (or stands for) a remote call.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            Error::Rpc(status) => Some(status.code()),
            Error::DeadlineExceeded(_) => Some(tonic::Code::DeadlineExceeded),
            _ => None,
        }
    }

    /// Whether the error was raised locally, before any network interaction.
    pub fn is_caller_misuse(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A full request object was supplied together with flattened fields.
    #[error(
        "{method}: if the `request` argument is set, then none of the individual field arguments should be set"
    )]
    RequestAndFields {
        /// The operation that was called.
        method: &'static str,
    },

    /// A transport instance was supplied together with credentials.
    #[error("when providing a transport instance, provide its credentials directly")]
    TransportAndCredentials,

    /// A metadata key or value cannot be sent as gRPC metadata.
    #[error("Invalid metadata {key}: {reason}")]
    InvalidMetadata {
        /// Metadata key.
        key: String,
        /// Reason for invalidity.
        reason: String,
    },
}
