//! HTTP transport backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{REFERER, SET_COOKIE},
};
use tracing::debug;

use crate::{
    csrf::{CsrfError, CsrfToken},
    transport::{CartTransport, FormRequest, TransportError, TransportResponse},
};

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Storefront root, e.g. `"http://localhost:8000"`.
    pub base_url: String,

    /// Per-request timeout. `None` leaves the client default in place.
    pub timeout: Option<Duration>,
}

/// Talks to the storefront over HTTP, keeping session cookies between calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http: Client,
}

impl HttpTransport {
    /// Create a new transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder().cookie_store(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Load a storefront page and read the anti-forgery token it issues.
    ///
    /// The `Set-Cookie` header named `cookie_name` wins; otherwise the page's
    /// `<meta name="csrf-token">` tag is used. The session cookie is kept for
    /// later posts.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, or when the page carries no token.
    pub async fn fetch_csrf_token(
        &self,
        path: &str,
        cookie_name: &str,
    ) -> Result<CsrfToken, TransportError> {
        let response = self.http.get(self.url(path)).send().await?;

        let from_cookie = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|header| CsrfToken::from_cookie_header(header, cookie_name).ok());

        if let Some(token) = from_cookie {
            debug!(cookie = cookie_name, "csrf token read from cookie");

            return Ok(token);
        }

        let status = response.status();
        let markup = response.text().await?;

        match CsrfToken::from_meta_tag(&markup) {
            Ok(token) => {
                debug!("csrf token read from page markup");

                Ok(token)
            }
            Err(CsrfError::NotFound(_)) if !status.is_success() => {
                Err(TransportError::Status(status.as_u16()))
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl CartTransport for HttpTransport {
    async fn post_form(&self, request: FormRequest) -> Result<TransportResponse, TransportError> {
        let response = self
            .http
            .post(self.url(&request.path))
            .header("X-Requested-With", "XMLHttpRequest")
            .header(REFERER, format!("{}/", self.base_url))
            .form(&request.fields)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
