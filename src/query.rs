//! The shareable `country=<name>` query parameter.
//!
//! Accepts a bare query (`country=India`), a query with its leading `?`, or a
//! whole link (`https://example.org/?country=Costa%20Rica`). `+` decodes to a space.

use crate::error::{Error, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::fmt;

pub const COUNTRY_KEY: &str = "country";

/// Scheme and path used when printing a share link.
pub const SHARE_PREFIX: &str = "country-lookup://search";

// Unreserved characters per RFC 3986 stay as they are.
const QUERY_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Query parameters with the `country` value decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    country: Option<String>,
}

fn decode(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| Error::InvalidQuery(format!("'{raw}' is not valid UTF-8 once decoded ({e})")))
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(country: impl Into<String>) -> Self {
        let mut params = Self::default();
        params.set_country(country);
        params
    }

    /// Parse a query string or link. Unknown keys are ignored; the first
    /// non-blank `country` wins.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let query = match input.split_once('?') {
            Some((_, q)) => q,
            None if input.contains('=') => input,
            None => "",
        };
        // Drop a fragment, if any.
        let query = query.split('#').next().unwrap_or_default();

        let mut country = None;
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode(key)? != COUNTRY_KEY || country.is_some() {
                continue;
            }
            let value = decode(value)?;
            if !value.trim().is_empty() {
                country = Some(value);
            }
        }
        Ok(Self { country })
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        let country = country.into();
        self.country = if country.trim().is_empty() {
            None
        } else {
            Some(country)
        };
    }

    /// Encoded form without leading `?`, e.g. `country=Costa%20Rica`; empty when unset.
    pub fn to_query_string(&self) -> String {
        match &self.country {
            Some(c) => format!("{COUNTRY_KEY}={}", utf8_percent_encode(c, QUERY_SAFE)),
            None => String::new(),
        }
    }

    /// Full share link, e.g. `country-lookup://search?country=India`.
    pub fn share_link(&self) -> String {
        let q = self.to_query_string();
        if q.is_empty() {
            SHARE_PREFIX.to_string()
        } else {
            format!("{SHARE_PREFIX}?{q}")
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
