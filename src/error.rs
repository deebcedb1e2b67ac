//! Error types and utilities.

use crate::parser::Rule;
pub use failure::Error;
use failure::*;

/// Either `Ok(T)` or `Err(failure::Error)`.
pub type Result<T> = ::std::result::Result<T, failure::Error>;

/// A parser error.
///
/// Every parse failure aborts the whole header; there are no partial results.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ParserError {
    /// The target of a link is not a valid URL reference.
    #[fail(display = "Malformed URL reference {:?}: {}", fragment, reason)]
    MalformedUrl { fragment: String, reason: String },

    /// A param with a name but no `=` separator.
    #[fail(display = "Param {:?} has no value", _0)]
    MissingParamValue(String),

    /// The `Link` header value is not visible ASCII text.
    #[fail(display = "Link header value is not text: {}", _0)]
    NonTextHeader(String),

    /// The grammar rejected the input.
    #[fail(display = "Syntax error: {}", _0)]
    Syntax(String),

    /// Given invalid `Rule` variant to `from_rule`
    #[fail(display = "Expected a rule of type {} but given {} instead", _0, _1)]
    InvalidRule(Rule, Rule),
}

/// A formatting error.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum FormatError {
    /// The formatted header cannot be carried by an HTTP header value.
    #[fail(display = "Invalid Link header value: {}", _0)]
    InvalidHeaderValue(String),
}
