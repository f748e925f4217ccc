//! Cart responses.

use serde::Deserialize;

use crate::{cart::CartError, transport::TransportResponse};

/// Body of a successful add: the cart's new total quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CartAddResponse {
    /// Units now in the cart.
    pub qty: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "Error")]
    error: String,
}

impl TryFrom<&TransportResponse> for CartAddResponse {
    type Error = CartError;

    fn try_from(response: &TransportResponse) -> Result<Self, Self::Error> {
        if !response.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&response.body)
                .ok()
                .map(|body| body.error);

            return Err(CartError::Rejected {
                status: response.status,
                detail,
            });
        }

        serde_json::from_str(&response.body).map_err(CartError::MalformedResponse)
    }
}
