// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Glue between [`Header`] and the `http` crate.

use crate::error::{FormatError, ParserError, Result};
use crate::header::Header;
use crate::parser::parse;
use http::header::{HeaderMap, HeaderValue, LINK};
use http::Response;
use std::convert::TryFrom;
use tracing::trace;

/// Parses the `Link` header of a response.
///
/// Only the first `Link` value is read. A response without one yields an
/// empty header.
///
/// ```
/// let response = http::Response::builder()
///     .header("link", r#"<http://green.com>; rel="next""#)
///     .body(())
///     .unwrap();
///
/// let header = linkrel::parse_response(&response).expect("valid header");
///
/// assert!(header.next().is_some());
/// ```
pub fn parse_response<B>(response: &Response<B>) -> Result<Header> {
    parse_headers(response.headers())
}

/// Parses the `Link` entry of a header map.
pub fn parse_headers(headers: &HeaderMap) -> Result<Header> {
    let value = match headers.get(LINK) {
        Some(value) => value
            .to_str()
            .map_err(|err| ParserError::NonTextHeader(err.to_string()))?,
        None => {
            trace!("no link header");
            ""
        }
    };

    parse(value)
}

impl TryFrom<&Header> for HeaderValue {
    type Error = failure::Error;

    fn try_from(header: &Header) -> Result<HeaderValue> {
        HeaderValue::from_str(&header.to_string())
            .map_err(|err| FormatError::InvalidHeaderValue(err.to_string()).into())
    }
}
