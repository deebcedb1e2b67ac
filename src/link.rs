// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::param::Params;
use crate::parser::Rule;
use crate::uri::UriRef;
use pest::iterators::Pair;
use std::fmt::{self, Display};
use url::Url;

/// A single entry of a Link header: a target URL and its params.
///
/// Formatting emits `<url>` followed by every param as `name="value"` in
/// ascending name order, all joined with `"; "`.
///
/// ```
/// use linkrel::link::Link;
/// use url::Url;
///
/// let mut link = Link::with_rel(Url::parse("http://red.com").unwrap(), "first");
/// link.params.insert("other", "foo");
///
/// assert_eq!(link.rel(), Some("first"));
/// assert_eq!(link.to_string(), r#"<http://red.com/>; other="foo"; rel="first""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: UriRef,
    pub params: Params,
}

impl Link {
    pub fn new(url: impl Into<UriRef>, params: Params) -> Link {
        Link {
            url: url.into(),
            params,
        }
    }

    /// A link whose only param is `rel`.
    pub fn with_rel(url: Url, rel: impl Into<String>) -> Link {
        let mut params = Params::new();
        params.insert("rel", rel);

        Link::new(url, params)
    }

    /// The relation type, if any.
    pub fn rel(&self) -> Option<&str> {
        self.param("rel")
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn from_rule(pair: Pair<Rule>, base: Option<&Url>) -> Result<Link> {
        ensure!(
            pair.as_rule() == Rule::link,
            ParserError::InvalidRule(Rule::link, pair.as_rule())
        );

        let mut target = None;
        let mut params = Params::new();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::target => {
                    let fragment = inner_pair
                        .as_str()
                        .trim_matches(|c: char| c.is_whitespace() || c == '<' || c == '>');
                    target = Some(UriRef::parse(fragment, base)?);
                }

                Rule::param => {
                    // Last one wins on repeated names.
                    if let Some((name, value)) = Params::from_rule(inner_pair)? {
                        params.insert(name, value);
                    }
                }

                _ => unreachable!(),
            }
        }

        match target {
            Some(url) => Ok(Link { url, params }),
            None => Err(ParserError::Syntax("link without a target".into()).into()),
        }
    }
}

impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "<{}>", self.url)?;

        for (name, value) in self.params.sorted() {
            write!(formatter, "; {}=\"{}\"", name, value)?;
        }

        Ok(())
    }
}
