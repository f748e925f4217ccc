//! Transport to the storefront.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::csrf::CsrfError;

mod http;

pub use http::{HttpTransport, HttpTransportConfig};

/// A form-encoded POST. Fields are sent in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// Path relative to the storefront root, e.g. `/cart/add/`.
    pub path: String,

    /// Form fields.
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors that can occur while talking to the storefront.
#[derive(Debug, Error)]
pub enum TransportError {
    /// An HTTP transport or decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request never completed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The server answered with a non-2xx status where a page was expected.
    #[error("unexpected status {0}")]
    Status(u16),

    /// A token page was fetched but carried no usable token.
    #[error("csrf token unavailable")]
    Csrf(#[from] CsrfError),
}

/// Sends form posts to the storefront.
#[automock]
#[async_trait]
pub trait CartTransport: Send + Sync {
    /// Post `request` and return whatever the server answered, whatever the
    /// status.
    async fn post_form(&self, request: FormRequest) -> Result<TransportResponse, TransportError>;
}
