//! Prelude

pub use crate::{
    cart::{CartAddRequest, CartAddResponse, CartDispatcher, CartError},
    csrf::{CsrfError, CsrfToken},
    notifications::{Notification, NotificationKind, NotificationPresenter},
    page::{
        MemoryBadge, MemoryNotifications, NotificationContainer, NotificationId, QuantityBadge,
    },
    products::{ProductId, Quantity},
    transport::{
        CartTransport, FormRequest, HttpTransport, HttpTransportConfig, TransportError,
        TransportResponse,
    },
};
