//! Alert markup.

use crate::notifications::Notification;

/// Escape `text` for use as HTML text content or a quoted attribute value.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

impl Notification {
    /// Render as a dismissible Bootstrap alert.
    pub fn to_markup(&self) -> String {
        format!(
            concat!(
                r#"<div class="alert alert-{} alert-dismissible fade show" role="alert">"#,
                "{}",
                r#"<button type="button" class="btn-close" data-bs-dismiss="alert" "#,
                r#"aria-label="Close"></button>"#,
                "</div>",
            ),
            self.kind.css_modifier(),
            escape_text(&self.message),
        )
    }
}
