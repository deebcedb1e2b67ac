// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{ParserError, Result};
use crate::parser::Rule;
use pest::iterators::Pair;
use std::collections::HashMap;
use std::iter::FromIterator;

/// The params of a link, keyed by name.
///
/// Names are case-sensitive and unique. Values are kept without their
/// surrounding quotes, so `rel=next` and `rel="next"` both store `next`.
///
/// Iteration order of the underlying map is unspecified; use [`Params::sorted`]
/// when order matters.
///
/// ## Examples
///
/// ```
/// use linkrel::param::Params;
///
/// let mut params = Params::new();
/// params.insert("rel", "next");
/// params.insert("title", "next page");
///
/// assert_eq!(params.get("rel"), Some("next"));
/// assert_eq!(params.get("Rel"), None);
/// assert_eq!(params.sorted(), vec![("rel", "next"), ("title", "next page")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    /// Inserts a param, replacing any previous value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name/value pairs in ascending name order.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        pairs
    }

    /// Parses a `param` rule into a name/value pair.
    ///
    /// Returns `None` for an empty param such as the one left by a trailing
    /// `;`. A non-empty param without `=` is an error.
    pub fn from_rule(pair: Pair<Rule>) -> Result<Option<(String, String)>> {
        ensure!(
            pair.as_rule() == Rule::param,
            ParserError::InvalidRule(Rule::param, pair.as_rule())
        );

        let mut name = "";
        let mut value = None;

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::name => name = inner_pair.as_str(),

                Rule::value => value = Some(inner_pair.as_str()),

                _ => unreachable!(),
            }
        }

        match value {
            Some(value) => Ok(Some((
                unquote(name.trim_start()),
                unquote(value.trim_end()),
            ))),

            None if name.trim().is_empty() => Ok(None),

            None => Err(ParserError::MissingParamValue(name.trim().to_string()).into()),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

fn unquote(s: &str) -> String {
    s.trim_matches('"').to_string()
}
