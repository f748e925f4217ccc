//! Add-to-cart dispatcher.

use std::{fmt, sync::Arc};

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::{
    cart::{CART_ADD_PATH, CartAddRequest, CartAddResponse, CartError},
    csrf::CsrfToken,
    notifications::{NotificationKind, NotificationPresenter},
    page::QuantityBadge,
    products::{ProductId, Quantity},
    transport::CartTransport,
};

/// Shown after the server accepted the product.
pub const ADDED_MESSAGE: &str = "Product added to cart!";

/// Shown after any failure. Details go to the log only.
pub const FAILED_MESSAGE: &str = "Error adding to cart";

/// Sends add-to-cart requests and reports the outcome on the page.
///
/// Calls are independent. Overlapping requests are not ordered: whichever
/// response completes last decides what the badge shows.
#[derive(Clone)]
pub struct CartDispatcher {
    transport: Arc<dyn CartTransport>,
    badge: Arc<dyn QuantityBadge>,
    presenter: NotificationPresenter,
    csrf_token: CsrfToken,
    add_path: String,
}

impl CartDispatcher {
    /// Build a dispatcher posting to [`CART_ADD_PATH`].
    pub fn new(
        transport: Arc<dyn CartTransport>,
        badge: Arc<dyn QuantityBadge>,
        presenter: NotificationPresenter,
        csrf_token: CsrfToken,
    ) -> Self {
        Self {
            transport,
            badge,
            presenter,
            csrf_token,
            add_path: CART_ADD_PATH.to_string(),
        }
    }

    /// Post to a different endpoint.
    #[must_use]
    pub fn with_add_path(mut self, add_path: impl Into<String>) -> Self {
        self.add_path = add_path.into();
        self
    }

    /// Fire and forget: start adding the product and return immediately.
    ///
    /// The handle is only useful for waiting; dropping it does not cancel the
    /// request. Must be called from within a Tokio runtime.
    pub fn dispatch(
        &self,
        product_id: impl Into<ProductId>,
        quantity: impl Into<Quantity>,
    ) -> JoinHandle<()> {
        let dispatcher = self.clone();
        let request = CartAddRequest::new(product_id, quantity);

        tokio::spawn(async move { dispatcher.run(request).await })
    }

    /// Add the product, update the badge, and show the outcome.
    ///
    /// Never fails from the caller's point of view; failures end up as an
    /// error notification and a log line.
    pub async fn add_to_cart(
        &self,
        product_id: impl Into<ProductId>,
        quantity: impl Into<Quantity>,
    ) {
        self.run(CartAddRequest::new(product_id, quantity)).await;
    }

    /// Send `request` and decode the reply without touching the page.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server rejects it, or the
    /// body has no integer `qty`.
    pub async fn submit(&self, request: CartAddRequest) -> Result<CartAddResponse, CartError> {
        let form = request.into_form(&self.add_path, &self.csrf_token);
        let response = self.transport.post_form(form).await?;

        CartAddResponse::try_from(&response)
    }

    async fn run(&self, request: CartAddRequest) {
        debug!(
            product_id = %request.product_id,
            quantity = %request.quantity,
            "adding product to cart"
        );

        match self.submit(request).await {
            Ok(response) => {
                self.badge.set_text(&response.qty.to_string());
                self.presenter.show(ADDED_MESSAGE, NotificationKind::Success);
            }
            Err(cart_error) => {
                log_failure(&cart_error);
                self.presenter.show(FAILED_MESSAGE, NotificationKind::Error);
            }
        }
    }
}

impl fmt::Debug for CartDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartDispatcher")
            .field("add_path", &self.add_path)
            .field("presenter", &self.presenter)
            .finish_non_exhaustive()
    }
}

fn log_failure(cart_error: &CartError) {
    match cart_error {
        CartError::Transport(source) => error!("error adding to cart: {source}"),
        CartError::Rejected {
            status,
            detail: Some(detail),
        } => error!(status, "error adding to cart: {detail}"),
        CartError::Rejected { status, detail: None } => {
            error!(status, "error adding to cart: server rejected request");
        }
        CartError::MalformedResponse(source) => {
            error!("error adding to cart: unreadable response: {source}");
        }
    }
}
