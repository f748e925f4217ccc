//! Storefront cart client.
//!
//! Sends "add to cart" requests to a storefront, mirrors the returned cart
//! quantity into a page badge, and shows short-lived notifications about the
//! outcome. Page elements are injected as handles ([`page::QuantityBadge`],
//! [`page::NotificationContainer`]) and the network is reached through
//! [`transport::CartTransport`], so the whole flow runs without a browser.

pub mod cart;
pub mod csrf;
pub mod notifications;
pub mod page;
pub mod prelude;
pub mod products;
pub mod transport;
