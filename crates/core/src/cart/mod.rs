//! Cart

mod dispatcher;
mod errors;
mod requests;
mod responses;

pub use dispatcher::{ADDED_MESSAGE, CartDispatcher, FAILED_MESSAGE};
pub use errors::CartError;
pub use requests::{ACTION_MARKER, CART_ADD_PATH, CartAddRequest};
pub use responses::CartAddResponse;
