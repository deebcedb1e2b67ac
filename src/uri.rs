// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use std::fmt::{self, Display};
use url::Url;

/// A link target.
///
/// Holds the text the target was parsed from together with the resolved URL,
/// if any. Formatting writes the original text back, so `<http://example.org>`
/// is not turned into `<http://example.org/>` on the way out.
///
/// Relative references like `/items?page=2` are kept as they are when there is
/// no base URL to resolve them against.
///
/// ```
/// use linkrel::uri::UriRef;
///
/// let uri = UriRef::parse("http://example.org", None).expect("valid url");
///
/// assert_eq!(uri.to_string(), "http://example.org");
/// assert_eq!(uri.url().map(|url| url.as_str()), Some("http://example.org/"));
///
/// let uri = UriRef::parse("/items?page=2", None).expect("valid reference");
///
/// assert!(uri.is_relative());
/// assert_eq!(uri.to_string(), "/items?page=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriRef {
    raw: String,
    url: Option<Url>,
}

impl UriRef {
    /// Parses a URL reference, resolving it against `base` when it is
    /// relative and a base is given.
    pub fn parse(input: &str, base: Option<&Url>) -> Result<UriRef> {
        let url = match Url::parse(input) {
            Ok(url) => Some(url),

            Err(url::ParseError::RelativeUrlWithoutBase) => {
                check_relative(input).map_err(|reason| malformed(input, reason))?;

                match base {
                    Some(base) => Some(
                        base.join(input)
                            .map_err(|cause| malformed(input, cause.to_string()))?,
                    ),
                    None => None,
                }
            }

            Err(cause) => return Err(malformed(input, cause.to_string()).into()),
        };

        Ok(UriRef {
            raw: input.to_string(),
            url,
        })
    }

    /// The resolved URL. `None` for a relative reference parsed without a base.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn is_relative(&self) -> bool {
        self.url.is_none()
    }

    /// The text the reference was built from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the reference and returns the resolved URL, if any.
    pub fn into_url(self) -> Option<Url> {
        self.url
    }
}

impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        UriRef {
            raw: url.as_str().to_string(),
            url: Some(url),
        }
    }
}

impl Display for UriRef {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.raw)
    }
}

fn malformed(fragment: &str, reason: impl Into<String>) -> ParserError {
    ParserError::MalformedUrl {
        fragment: fragment.to_string(),
        reason: reason.into(),
    }
}

/// Syntax checks for a reference without a scheme (RFC 3986, section 4.2).
fn check_relative(input: &str) -> ::std::result::Result<(), String> {
    if input.chars().any(char::is_control) {
        return Err("invalid control character".into());
    }

    let first_segment = input.split(|c: char| c == '/' || c == '?' || c == '#').next().unwrap_or("");
    if first_segment.contains(':') {
        return Err("first path segment cannot contain a colon".into());
    }

    let bytes = input.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err("invalid percent escape".into());
            }
        }
    }

    // Catches what is left, e.g. a bad port in `//example.org:99999/`.
    let placeholder = Url::parse("http://localhost/").map_err(|err| err.to_string())?;
    placeholder.join(input).map(|_| ()).map_err(|err| err.to_string())
}
