//! Cart requests.

use crate::{
    csrf::{CSRF_FORM_FIELD, CsrfToken},
    products::{ProductId, Quantity},
    transport::FormRequest,
};

/// Endpoint that adds a product to the session cart.
pub const CART_ADD_PATH: &str = "/cart/add/";

/// Value of the `action` field the endpoint insists on.
pub const ACTION_MARKER: &str = "post";

/// One product/quantity pair to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAddRequest {
    /// Product to add.
    pub product_id: ProductId,

    /// Units to add.
    pub quantity: Quantity,
}

impl CartAddRequest {
    /// Build a request.
    pub fn new(product_id: impl Into<ProductId>, quantity: impl Into<Quantity>) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: quantity.into(),
        }
    }

    /// Encode as the form the storefront expects at `path`.
    pub fn into_form(self, path: &str, csrf_token: &CsrfToken) -> FormRequest {
        FormRequest {
            path: path.to_string(),
            fields: vec![
                ("product_id".to_string(), self.product_id.to_string()),
                ("product_qty".to_string(), self.quantity.to_string()),
                (CSRF_FORM_FIELD.to_string(), csrf_token.expose().to_string()),
                ("action".to_string(), ACTION_MARKER.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn form_carries_all_four_fields_in_order() -> TestResult {
        let token = CsrfToken::new("tok")?;
        let form = CartAddRequest::new(12_u64, 3_u32).into_form(CART_ADD_PATH, &token);

        let names: Vec<&str> = form.fields.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(form.path, "/cart/add/");
        assert_eq!(
            names,
            vec!["product_id", "product_qty", "csrfmiddlewaretoken", "action"]
        );
        assert_eq!(form.field("product_id"), Some("12"));
        assert_eq!(form.field("product_qty"), Some("3"));
        assert_eq!(form.field("csrfmiddlewaretoken"), Some("tok"));
        assert_eq!(form.field("action"), Some("post"));

        Ok(())
    }
}
