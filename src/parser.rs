// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::header::Header;
use pest::Parser;
use std::fmt::{self, Display};
use tracing::trace;
use url::Url;

#[derive(Parser)]
#[grammar = "link.pest"]
pub struct LinkHeaderParser;

impl Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// Parses a Link header value. Relative targets are kept unresolved.
///
/// Line breaks are dropped before parsing and a blank input yields an empty
/// header.
///
/// ```
/// let header = linkrel::parse("<http://red.com>; rel=first,\n<http://purple.com>; rel=last")
///     .expect("valid header");
///
/// assert_eq!(header.len(), 2);
/// assert_eq!(
///     header.to_string(),
///     r#"<http://red.com>; rel="first", <http://purple.com>; rel="last""#
/// );
/// ```
pub fn parse(input: &str) -> Result<Header> {
    parse_header(input, None)
}

/// Parses a Link header value, resolving relative targets against `base`.
///
/// ```
/// use url::Url;
///
/// let base = Url::parse("http://example.com/TheBook/chapter3").unwrap();
/// let header = linkrel::parse_with_base(r#"</TheBook/chapter2>; rel="previous""#, &base)
///     .expect("valid header");
/// let prev = header.prev().expect("a prev link");
///
/// assert_eq!(
///     prev.url.url().map(|url| url.as_str()),
///     Some("http://example.com/TheBook/chapter2")
/// );
/// assert_eq!(prev.url.as_str(), "/TheBook/chapter2");
/// ```
pub fn parse_with_base(input: &str, base: &Url) -> Result<Header> {
    parse_header(input, Some(base))
}

fn parse_header(input: &str, base: Option<&Url>) -> Result<Header> {
    let input: String = input.chars().filter(|c| *c != '\n' && *c != '\r').collect();

    if input.trim().is_empty() {
        trace!("empty link header");
        return Ok(Header::default());
    }

    let rule = LinkHeaderParser::parse(Rule::header, &input)
        .map_err(|err| ParserError::Syntax(err.to_string()))?
        .next()
        .ok_or_else(|| ParserError::Syntax("empty parse".into()))?;

    let header = Header::from_rule(rule, base)?;
    trace!(links = header.len(), "parsed link header");

    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Link;
    use crate::param::Params;

    const PALETTE: &str = r#"<http://red.com>; other="foo"; rel="first", <http://purple.com>; rel="last", <http://green.com>; rel="next", <http://yellow.com>; rel="prev", <http://cyan.com>; rel="home""#;

    fn link(target: &str, params: &[(&str, &str)]) -> Link {
        Link::new(
            crate::uri::UriRef::parse(target, None).expect("Expect a valid url"),
            params.iter().cloned().collect::<Params>(),
        )
    }

    fn assert_palette(header: &Header) {
        assert_eq!(header.len(), 5);
        assert_eq!(
            header.first(),
            Some(&link("http://red.com", &[("rel", "first"), ("other", "foo")]))
        );
        assert_eq!(header.last(), Some(&link("http://purple.com", &[("rel", "last")])));
        assert_eq!(header.next(), Some(&link("http://green.com", &[("rel", "next")])));
        assert_eq!(header.prev(), Some(&link("http://yellow.com", &[("rel", "prev")])));
        assert_eq!(header.find(&["home"]), Some(&link("http://cyan.com", &[("rel", "home")])));
        assert_eq!(header.find(&["notThere"]), None);
    }

    #[test]
    fn palette() {
        let header = parse(&format!(" {}", PALETTE)).expect("Expect a valid header");

        assert_palette(&header);
    }

    #[test]
    fn canonical_form_is_a_fixed_point() {
        let header = parse(PALETTE).expect("Expect a valid header");

        assert_eq!(header.to_string(), PALETTE);
    }

    #[test]
    fn invalid_url() {
        let err = parse(" <:/fooboar>; rel=first").expect_err("Expect an invalid header");

        match err.downcast_ref::<ParserError>() {
            Some(ParserError::MalformedUrl { fragment, .. }) => assert_eq!(fragment, ":/fooboar"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn invalid_url_aborts_whole_header() {
        let actual = parse(r#"<http://red.com>; rel="first", <:/fooboar>; rel="last""#).is_err();

        assert!(actual);
    }

    #[test]
    fn handles_chunk_newlines() {
        let input = "<http://red.com>; rel=first; other=foo,
<http://purple.com>; rel=last,
<http://green.com>; rel=next,
<http://yellow.com>; rel=prev,
<http://cyan.com>; rel=home";

        let header = parse(input).expect("Expect a valid header");

        assert_palette(&header);
    }

    #[test]
    fn newlines_match_single_line() {
        let folded = parse("<http://red.com>; rel=first,\r\n<http://purple.com>; rel=last")
            .expect("Expect a valid header");
        let single = parse("<http://red.com>; rel=first, <http://purple.com>; rel=last")
            .expect("Expect a valid header");

        assert_eq!(folded, single);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse("").expect("Expect a valid header"), Header::default());
        assert_eq!(parse(" \n ").expect("Expect a valid header"), Header::default());
    }

    #[test]
    fn unquoted_values_are_normalised() {
        let header = parse("<http://red.com>; rel=first; other=foo").expect("Expect a valid header");
        let quoted = parse(r#"<http://red.com>; other="foo"; rel="first""#).expect("Expect a valid header");

        assert_eq!(header, quoted);
        assert_eq!(header.to_string(), r#"<http://red.com>; other="foo"; rel="first""#);
    }

    #[test]
    fn link_without_rel() {
        let header = parse(r#"<http://red.com>; title="Red""#).expect("Expect a valid header");

        assert_eq!(header.len(), 1);
        assert_eq!(header.find(&["first", "last", "next", "prev", "previous"]), None);
    }

    #[test]
    fn quoted_comma_splits_segment() {
        let header = parse(r#"<http://red.com>; title="a, b"; rel="first""#).expect("Expect a valid header");

        assert_eq!(header.len(), 2);
        assert_eq!(header.links[0], link("http://red.com", &[("title", "a")]));
        assert_eq!(header.links[1], link("b\"", &[("rel", "first")]));
        assert!(header.links[1].url.is_relative());
        assert_eq!(header.first().map(|l| l.url.as_str()), Some("b\""));
    }

    #[test]
    fn trailing_comma() {
        let header = parse(r#"<http://red.com>; rel="first","#).expect("Expect a valid header");

        assert_eq!(header.len(), 2);
        assert_eq!(header.links[1], link("", &[]));
        assert_eq!(header.to_string(), r#"<http://red.com>; rel="first", <>"#);
    }

    #[test]
    fn relative_target() {
        let input = r#"</items?page=2>; rel="next", </items?page=9>; rel="last""#;

        let header = parse(input).expect("Expect a valid header");
        let next = header.next().expect("Expect a next link");

        assert!(next.url.is_relative());
        assert_eq!(next.url.as_str(), "/items?page=2");
        assert_eq!(header.last().map(|l| l.url.as_str()), Some("/items?page=9"));
        assert_eq!(header.to_string(), input);
    }

    #[test]
    fn malformed_relative_target() {
        let err = parse(r#"</items%zz>; rel="next""#).expect_err("Expect an invalid header");

        match err.downcast_ref::<ParserError>() {
            Some(ParserError::MalformedUrl { fragment, .. }) => assert_eq!(fragment, "/items%zz"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn missing_param_value() {
        let err = parse("<http://red.com>; rel").expect_err("Expect an invalid header");

        assert_eq!(
            err.downcast_ref::<ParserError>(),
            Some(&ParserError::MissingParamValue("rel".into()))
        );
    }

    #[test]
    fn link_header_field_examples_1() {
        let input = r#"<http://example.com/TheBook/chapter2>; rel="previous"; title="previous chapter""#;

        let header = parse(input).expect("Expect a valid header");

        assert_eq!(
            header.links,
            vec![link(
                "http://example.com/TheBook/chapter2",
                &[("rel", "previous"), ("title", "previous chapter")]
            )]
        );
        assert_eq!(header.prev(), header.links.first());
    }

    #[test]
    fn link_header_field_examples_2() {
        let base = Url::parse("http://example.com/").unwrap();
        let input = "</terms>; rel=\"copyright\"; anchor=\"#foo\"";

        let header = parse_with_base(input, &base).expect("Expect a valid header");
        let copyright = header.find(&["copyright"]).expect("Expect a copyright link");

        assert_eq!(copyright.url.url().map(Url::as_str), Some("http://example.com/terms"));
        assert_eq!(copyright.param("anchor"), Some("#foo"));
        assert_eq!(header.to_string(), r##"</terms>; anchor="#foo"; rel="copyright""##);
    }

    #[test]
    fn link_header_field_examples_3() {
        let input = r#"</>; rel="http://example.net/foo""#;

        let header = parse(input).expect("Expect a valid header");
        let link = header.find(&["http://example.net/foo"]).expect("Expect an extension link");

        assert_eq!(link.url.as_str(), "/");
        assert_eq!(link.url.url(), None);
        assert_eq!(header.to_string(), input);
    }

    #[test]
    fn unicode_fest() {
        let input = "<http://example.org/\u{FE0F}>; rel=\"\u{1F383}\"";

        let header = parse(input).expect("Expect a valid header");

        assert_eq!(header.find(&["🎃"]).map(|l| l.url.as_str()), Some("http://example.org/\u{FE0F}"));
    }

    #[test]
    fn wrong_rule_type() {
        let rule = LinkHeaderParser::parse(Rule::link, "<https://example.org>")
            .expect("unsuccessful parse")
            .next()
            .unwrap();

        let actual = Header::from_rule(rule, None).is_err();

        assert!(actual);
    }
}
