//! Cart errors.

use thiserror::Error;

use crate::transport::TransportError;

/// Why an add-to-cart request did not produce a new quantity.
#[derive(Debug, Error)]
pub enum CartError {
    /// The request never completed.
    #[error("transport failure")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("server rejected request with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,

        /// The `Error` text from the body, when the server sent one.
        detail: Option<String>,
    },

    /// The body was not the expected `{ "qty": <integer> }`.
    #[error("malformed cart response")]
    MalformedResponse(#[source] serde_json::Error),
}
