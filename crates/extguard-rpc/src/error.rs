//! # Design
//!
//! - Errors for the control endpoint client carry the RPC method that failed.
//! - Messages stay constant; host-provided fault details live in fields.

use thiserror::Error;

/// Result alias for control endpoint calls.
pub type RpcResult<T> = Result<T, RpcError>;

/// Errors raised while talking to the host's control endpoint.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The endpoint address could not be turned into a URL.
    #[error("invalid control endpoint url")]
    InvalidUrl {
        /// Address that failed to parse.
        value: String,
        /// Underlying parse error.
        source: url::ParseError,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build http client")]
    ClientBuild {
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The request could not be sent or its body could not be read.
    #[error("control request failed")]
    Transport {
        /// RPC method being called.
        method: &'static str,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-success status.
    #[error("control request returned error status")]
    Status {
        /// RPC method being called.
        method: &'static str,
        /// HTTP status code.
        status: u16,
    },
    /// The response body was not a valid JSON-RPC envelope.
    #[error("control response could not be decoded")]
    Decode {
        /// RPC method being called.
        method: &'static str,
        /// Underlying decode error.
        source: reqwest::Error,
    },
    /// The host reported a JSON-RPC fault.
    #[error("control request faulted")]
    Fault {
        /// RPC method being called.
        method: &'static str,
        /// Fault code reported by the host.
        code: i64,
        /// Fault message reported by the host.
        message: String,
    },
    /// The envelope carried neither a result nor a fault.
    #[error("control response carried no result")]
    EmptyResult {
        /// RPC method being called.
        method: &'static str,
    },
    /// The host refused to apply a queue edit.
    #[error("queue edit rejected")]
    Rejected {
        /// Edit command that was refused.
        command: String,
    },
}
