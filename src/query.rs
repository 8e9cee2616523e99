// src/query.rs
//! Query-string fragments appended to listing requests.
//!
//! A fragment always starts with `&` and is concatenated verbatim onto
//! `?page=N&project_category_parent=...`. Filter fragments encode each
//! `key=value` segment as one unit with the `encodeURI` character set, so
//! reserved characters (`=`, `,`, `&`, `/`, ...) inside a value reach the
//! API unescaped. The directory API depends on that wire format.

use crate::constants::SEARCH_PARAM;
use crate::types::{FilterState, FilterValue};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters `encodeURI` leaves alone besides ASCII alphanumerics.
const ENCODE_URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Serialized filter or search state, e.g. `&skills=python,policy&`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryFragment(String);

impl QueryFragment {
    /// Builds the fragment for a set of filters.
    ///
    /// Every non-empty key becomes one `key=value&` segment; list values are
    /// comma-joined. Keys with empty values are left out entirely. An empty
    /// filter state yields the bare `&`.
    pub fn from_filters(filters: &FilterState) -> Self {
        let mut url = String::from("&");
        for (key, value) in filters.iter().filter(|(_, v)| !v.is_empty()) {
            let segment = match value {
                FilterValue::List(values) => format!("{}={}", key, values.join(",")),
                FilterValue::Scalar(value) => format!("{}={}", key, value),
            };
            url.push_str(&encode_uri(&segment));
            url.push('&');
        }
        Self(url)
    }

    /// Builds the fragment for a free-text search, `&search=<term>`.
    pub fn search(term: &str) -> Self {
        Self(format!("&{}={}", SEARCH_PARAM, encode_uri(term)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of `key=value` segments carried by the fragment.
    pub fn segment_count(&self) -> usize {
        self.0.split('&').filter(|s| !s.is_empty()).count()
    }
}

impl fmt::Display for QueryFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Percent-encodes with the character set of ECMAScript `encodeURI`.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, ENCODE_URI_SET).to_string()
}
