//! `Link` header parsing for page discovery.
//!
//! GitHub advertises pagination through a `Link` header of the form
//! `<url>; rel="next", <url>; rel="last"`. Only the `last` relation is used:
//! its `page` query parameter is the total number of pages.

use std::collections::HashMap;

use http::header::{HeaderMap, LINK};
use url::Url;

use super::descriptor::PAGE_PARAM;
use super::error::GitHubError;

/// Relation naming the final page of a listing.
pub const REL_LAST: &str = "last";

/// Base against which relative link targets are resolved. Only the query
/// of the resolved URL is read, so the host is irrelevant.
const RELATIVE_BASE: &str = "https://link.invalid/";

/// Relation to URL mapping taken from a response's `Link` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinkSet {
    links: HashMap<String, String>,
}

impl PageLinkSet {
    /// Collects every `Link` header value in `headers`.
    ///
    /// Entries that are not of the form `<url>; rel="..."` are skipped; this
    /// never fails.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut set = Self::default();
        for value in headers.get_all(LINK) {
            if let Ok(text) = value.to_str() {
                set.extend_from_value(text);
            }
        }
        set
    }

    /// Parses a single header value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut set = Self::default();
        set.extend_from_value(value);
        set
    }

    fn extend_from_value(&mut self, value: &str) {
        for entry in split_entries(value) {
            let Some((target, params)) = parse_entry(entry) else {
                continue;
            };
            for relation in relations(params) {
                self.links
                    .entry(relation.to_ascii_lowercase())
                    .or_insert_with(|| target.to_owned());
            }
        }
    }

    /// Returns the URL for a relation.
    #[must_use]
    pub fn get(&self, relation: &str) -> Option<&str> {
        self.links.get(relation).map(String::as_str)
    }

    /// Returns true when no relation was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Total page count advertised by the `last` relation.
    ///
    /// Relative targets are accepted. Returns 1 when there is no `last`
    /// relation, when its URL carries no `page` parameter, or when that
    /// parameter is `0`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidPagination`] when the `last` target
    /// cannot be resolved or its `page` value is not a non-negative integer.
    pub fn total_pages(&self) -> Result<u32, GitHubError> {
        let Some(last) = self.get(REL_LAST) else {
            return Ok(1);
        };
        let url = resolve(last).map_err(|error| GitHubError::InvalidPagination {
            message: format!("last link `{last}` is not a valid URL: {error}"),
        })?;
        let Some((_, page)) = url.query_pairs().find(|(key, _)| key == PAGE_PARAM) else {
            return Ok(1);
        };
        if page.is_empty() {
            return Ok(1);
        }
        page.parse::<u32>()
            .map(|count| count.max(1))
            .map_err(|_| GitHubError::InvalidPagination {
                message: format!("last link page `{page}` is not a non-negative integer"),
            })
    }
}

fn resolve(target: &str) -> Result<Url, url::ParseError> {
    Url::parse(RELATIVE_BASE)?.join(target)
}

/// Splits a header value on the commas that separate link entries.
///
/// Commas inside `<...>` or quoted parameter values do not split.
fn split_entries(value: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut in_quotes = false;
    let mut start = 0;
    for (index, ch) in value.char_indices() {
        match ch {
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            '"' if !in_target => in_quotes = !in_quotes,
            ',' if !in_target && !in_quotes => {
                entries.push(value.get(start..index).unwrap_or_default());
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    entries.push(value.get(start..).unwrap_or_default());
    entries
}

/// Splits `<url>; params` into its target and parameter text.
fn parse_entry(entry: &str) -> Option<(&str, &str)> {
    let rest = entry.trim().strip_prefix('<')?;
    let (target, params) = rest.split_once('>')?;
    Some((target.trim(), params))
}

/// Yields every relation named by the `rel` parameters of an entry.
fn relations(params: &str) -> impl Iterator<Item = &str> {
    params
        .split(';')
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("rel")
                .then(|| value.trim().trim_matches('"'))
        })
        .flat_map(str::split_whitespace)
}
