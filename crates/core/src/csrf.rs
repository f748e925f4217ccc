//! Anti-forgery (CSRF) tokens.
//!
//! The token is issued by the storefront per session. It is read at runtime
//! from a cookie, a `<meta>` tag, or explicit configuration.

use std::{borrow::Cow, fmt};

use thiserror::Error;
use tl::{Node, ParserOptions};
use zeroize::Zeroize;

/// Form field the storefront reads the token from.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Cookie the storefront stores the token in.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// `name` attribute of the `<meta>` tag carrying the token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Errors raised while obtaining a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsrfError {
    /// The token was present but blank.
    #[error("csrf token is empty")]
    Empty,

    /// No token could be located in the given source.
    #[error("no csrf token found in {0}")]
    NotFound(&'static str),
}

/// A non-empty anti-forgery token.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken {
    value: String,
}

impl CsrfToken {
    /// Wrap a raw token, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CsrfError::Empty`] when nothing is left after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CsrfError> {
        let mut raw = value.into();
        let trimmed = raw.trim().to_string();

        raw.zeroize();

        if trimmed.is_empty() {
            return Err(CsrfError::Empty);
        }

        Ok(Self { value: trimmed })
    }

    /// Extract the token from a `Cookie` or `Set-Cookie` header value.
    ///
    /// # Errors
    ///
    /// Returns [`CsrfError::NotFound`] when the cookie is absent, or
    /// [`CsrfError::Empty`] when it is present but blank.
    pub fn from_cookie_header(header: &str, cookie_name: &str) -> Result<Self, CsrfError> {
        header
            .split(';')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| name.trim() == cookie_name)
            .map_or(Err(CsrfError::NotFound("cookie header")), |(_, value)| {
                Self::new(value.trim().trim_matches('"'))
            })
    }

    /// Extract the token from a `<meta name="csrf-token" content="...">` tag.
    ///
    /// # Errors
    ///
    /// Returns [`CsrfError::NotFound`] when no such tag exists, or
    /// [`CsrfError::Empty`] when its content is blank.
    pub fn from_meta_tag(markup: &str) -> Result<Self, CsrfError> {
        let Ok(dom) = tl::parse(markup, ParserOptions::default()) else {
            return Err(CsrfError::NotFound("page markup"));
        };

        dom.nodes()
            .iter()
            .filter_map(Node::as_tag)
            .filter(|tag| tag.name().as_utf8_str().eq_ignore_ascii_case("meta"))
            .find_map(|tag| {
                let mut name = None;
                let mut content = None;

                for (key, value) in tag.attributes().iter() {
                    if key.eq_ignore_ascii_case("name") {
                        name = value;
                    } else if key.eq_ignore_ascii_case("content") {
                        content = value;
                    }
                }

                name.filter(|name| name.eq_ignore_ascii_case(CSRF_META_NAME))
                    .and(content)
                    .map(Cow::into_owned)
            })
            .map_or(Err(CsrfError::NotFound("page markup")), Self::new)
    }

    /// The raw token, for placing into an outgoing request.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(<redacted>)")
    }
}

impl Drop for CsrfToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn blank_tokens_are_rejected() {
        assert_eq!(CsrfToken::new("   "), Err(CsrfError::Empty));
    }

    #[test]
    fn tokens_are_trimmed() -> TestResult {
        let token = CsrfToken::new(" abc \n")?;

        assert_eq!(token.expose(), "abc");

        Ok(())
    }

    #[test]
    fn debug_output_hides_the_token() -> TestResult {
        let token = CsrfToken::new("s3cret")?;

        assert!(!format!("{token:?}").contains("s3cret"));

        Ok(())
    }

    #[test]
    fn reads_token_from_cookie_header() -> TestResult {
        let token = CsrfToken::from_cookie_header(
            "sessionid=xyz; csrftoken=Zq81LkWm; theme=dark",
            DEFAULT_CSRF_COOKIE,
        )?;

        assert_eq!(token.expose(), "Zq81LkWm");

        Ok(())
    }

    #[test]
    fn reads_token_from_set_cookie_header() -> TestResult {
        let token = CsrfToken::from_cookie_header(
            "csrftoken=\"abc123\"; expires=Fri, 15 Oct 2027 09:00:00 GMT; Path=/; SameSite=Lax",
            DEFAULT_CSRF_COOKIE,
        )?;

        assert_eq!(token.expose(), "abc123");

        Ok(())
    }

    #[test]
    fn missing_cookie_is_not_found() {
        let result = CsrfToken::from_cookie_header("sessionid=xyz", DEFAULT_CSRF_COOKIE);

        assert_eq!(result, Err(CsrfError::NotFound("cookie header")));
    }

    #[test]
    fn reads_token_from_meta_tag() -> TestResult {
        let markup = r#"<html><head>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width">
            <meta name="csrf-token" content="m3taT0ken">
        </head></html>"#;

        let token = CsrfToken::from_meta_tag(markup)?;

        assert_eq!(token.expose(), "m3taT0ken");

        Ok(())
    }

    #[test]
    fn reads_token_from_single_quoted_meta_tag() -> TestResult {
        let token = CsrfToken::from_meta_tag("<meta name='csrf-token' content='q1'/>")?;

        assert_eq!(token.expose(), "q1");

        Ok(())
    }

    #[test]
    fn reads_token_from_tab_separated_meta_tag() -> TestResult {
        let token = CsrfToken::from_meta_tag("<meta\tname=\"csrf-token\"\tcontent=\"t4b\">")?;

        assert_eq!(token.expose(), "t4b");

        Ok(())
    }

    #[test]
    fn reads_token_from_multiline_meta_tag() -> TestResult {
        let markup = "<head><meta\n    name=\"csrf-token\"\n    content=\"n3wl1ne\"\n></head>";

        let token = CsrfToken::from_meta_tag(markup)?;

        assert_eq!(token.expose(), "n3wl1ne");

        Ok(())
    }

    #[test]
    fn reads_token_from_uppercase_meta_tag() -> TestResult {
        let token = CsrfToken::from_meta_tag(r#"<META NAME="csrf-token" CONTENT="tok">"#)?;

        assert_eq!(token.expose(), "tok");

        Ok(())
    }

    #[test]
    fn reads_token_from_unquoted_meta_tag() -> TestResult {
        let token = CsrfToken::from_meta_tag("<meta name=csrf-token content=unqu0ted>")?;

        assert_eq!(token.expose(), "unqu0ted");

        Ok(())
    }

    #[test]
    fn meta_tag_without_content_is_not_found() {
        let result = CsrfToken::from_meta_tag(r#"<meta name="csrf-token">"#);

        assert_eq!(result, Err(CsrfError::NotFound("page markup")));
    }

    #[test]
    fn markup_without_meta_tag_is_not_found() {
        let result = CsrfToken::from_meta_tag("<html><body>shop</body></html>");

        assert_eq!(result, Err(CsrfError::NotFound("page markup")));
    }
}
