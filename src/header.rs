// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::link::Link;
use crate::parser::Rule;
use pest::iterators::Pair;
use std::fmt::{self, Display};
use std::slice;
use url::Url;

/// A collection of links, in the order they appeared in the header.
///
/// ## Examples
///
/// ```
/// let header = linkrel::parse(
///     r#"<https://api.example.org/items?page=3>; rel="next", <https://api.example.org/items?page=1>; rel="prev""#,
/// )
/// .expect("valid header");
///
/// let next = header.next().expect("a next link");
///
/// assert_eq!(next.url.url().and_then(|url| url.query()), Some("page=3"));
/// assert!(header.first().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub links: Vec<Link>,
}

impl Header {
    pub fn new(links: Vec<Link>) -> Header {
        Header { links }
    }

    /// Builds a header with one `rel` link per relation that has a URL.
    ///
    /// Relations mapped to `None` are skipped. Links follow the iteration
    /// order of `relations`, which for hash maps is unspecified.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use linkrel::header::Header;
    /// use url::Url;
    ///
    /// let mut relations = HashMap::new();
    /// relations.insert("next", Some(Url::parse("http://green.com").unwrap()));
    /// relations.insert("prev", None);
    ///
    /// let header = Header::from_relations(relations);
    ///
    /// assert_eq!(header.len(), 1);
    /// assert_eq!(header.to_string(), r#"<http://green.com/>; rel="next""#);
    /// ```
    pub fn from_relations<I, R>(relations: I) -> Header
    where
        I: IntoIterator<Item = (R, Option<Url>)>,
        R: Into<String>,
    {
        let links = relations
            .into_iter()
            .filter_map(|(rel, url)| url.map(|url| Link::with_rel(url, rel)))
            .collect();

        Header { links }
    }

    pub fn from_rule(pair: Pair<Rule>, base: Option<&Url>) -> Result<Header> {
        ensure!(
            pair.as_rule() == Rule::header,
            ParserError::InvalidRule(Rule::header, pair.as_rule())
        );

        let mut links = vec![];

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::link => {
                    let link = Link::from_rule(inner_pair, base)?;
                    links.push(link);
                }

                Rule::EOI => (),

                _ => unreachable!(),
            }
        }

        Ok(Header { links })
    }

    /// Returns the first link whose `rel` equals any of `rels`.
    ///
    /// Links without a `rel`, or with an empty one, never match.
    pub fn find(&self, rels: &[&str]) -> Option<&Link> {
        self.links.iter().find(|link| match link.rel() {
            Some(rel) if !rel.is_empty() => rels.iter().any(|candidate| *candidate == rel),
            _ => false,
        })
    }

    /// The `rel="first"` link.
    pub fn first(&self) -> Option<&Link> {
        self.find(&["first"])
    }

    /// The `rel="last"` link.
    pub fn last(&self) -> Option<&Link> {
        self.find(&["last"])
    }

    /// The `rel="next"` link.
    pub fn next(&self) -> Option<&Link> {
        self.find(&["next"])
    }

    /// The `rel="prev"` or `rel="previous"` link, whichever comes first.
    pub fn prev(&self) -> Option<&Link> {
        self.find(&["prev", "previous"])
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn iter(&self) -> slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Display for Header {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{}", link)?;
        }

        Ok(())
    }
}

impl IntoIterator for Header {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = &'a Link;
    type IntoIter = slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
