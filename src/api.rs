//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! Two endpoints are used:
//! - `all?fields=name` for the autocomplete master list,
//! - `name/{name}?fullText=true` for the profile of one country.
//!
//! ### Notes
//! - A lookup with no match answers with an object like `{"status":404,"message":"Not Found"}`
//!   instead of an array. That is surfaced as [`Lookup::NotFound`], not as an error.
//! - No retries are attempted; a failed request is reported once.
//! - Network timeouts default to 30s (10s connect) and come from [`ClientConfig`].
//!
//! Typical usage:
//! ```no_run
//! # use country_lookup::{Client, Lookup};
//! let client = Client::default();
//! match client.lookup("India")? {
//!     Lookup::Found(countries) => println!("{} match(es)", countries.len()),
//!     Lookup::NotFound(message) => println!("{message}"),
//! }
//! # Ok::<(), country_lookup::Error>(())
//! ```
use crate::error::{Error, Result};
use crate::models::{ApiMessage, CountrySummary, Lookup, NameOnly};
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Connection settings for [`Client`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Total request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    /// `None` only when building the client failed in [`Client::default`];
    /// every request then reports [`Error::ClientUnavailable`].
    http: Option<HttpClient>,
}

impl Default for Client {
    fn default() -> Self {
        match Self::new(ClientConfig::default()) {
            Ok(client) => client,
            Err(err) => {
                warn!("http client unavailable: {err}");
                Self {
                    base_url: DEFAULT_BASE_URL.into(),
                    http: None,
                }
            }
        }
    }
}

// Allow -, _, ., ~ unescaped; everything else (spaces included) is percent-encoded.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn enc_segment(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(5))
            .user_agent(concat!("country_lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            http: Some(http),
        })
    }

    /// URL of the exact-name lookup for `name`.
    pub fn lookup_url(&self, name: &str) -> String {
        format!("{}/name/{}?fullText=true", self.base_url, enc_segment(name))
    }

    /// URL of the all-countries endpoint, restricted to the `name` field.
    pub fn country_list_url(&self) -> String {
        format!("{}/all?fields=name", self.base_url)
    }

    fn get_text(&self, url: &str) -> Result<(u16, String)> {
        let http = self.http.as_ref().ok_or(Error::ClientUnavailable)?;
        debug!("GET {url}");
        let network = |source| Error::Network {
            url: url.to_string(),
            source,
        };
        let response = http.get(url).send().map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(network)?;
        debug!("GET {url} -> HTTP {status}, {} bytes", body.len());
        Ok((status, body))
    }

    /// Fetch the common names of all countries, sorted and de-duplicated.
    pub fn country_names(&self) -> Result<Vec<String>> {
        let url = self.country_list_url();
        let (status, body) = self.get_text(&url)?;
        if !is_success(status) {
            return Err(Error::Status { url, status });
        }
        parse_country_names(&body)
    }

    /// Look up a country by its exact (full text) name.
    ///
    /// ### Errors
    /// - Network/transport error
    /// - Body that is neither a record array nor a `{message}` object
    pub fn lookup(&self, name: &str) -> Result<Lookup> {
        let url = self.lookup_url(name);
        let (status, body) = self.get_text(&url)?;
        match parse_lookup(&body) {
            Ok(lookup) => Ok(lookup),
            Err(err) if !is_success(status) => {
                warn!("GET {url}: unusable error body ({err})");
                Err(Error::Status { url, status })
            }
            Err(err) => Err(err),
        }
    }
}

/// Parse the body of the all-countries endpoint into a sorted list of names.
pub fn parse_country_names(body: &str) -> Result<Vec<String>> {
    let records: Vec<NameOnly> = serde_json::from_str(body)?;
    let mut names: Vec<String> = records
        .into_iter()
        .map(|r| r.name.common.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}

/// Parse the body of a detail lookup.
///
/// An array of records is [`Lookup::Found`]; an object carrying a `message`
/// string is [`Lookup::NotFound`]. An empty array counts as not found.
pub fn parse_lookup(body: &str) -> Result<Lookup> {
    let v: Value = serde_json::from_str(body)?;

    if v.is_array() {
        let countries: Vec<CountrySummary> = serde_json::from_value(v)?;
        if countries.is_empty() {
            return Ok(Lookup::NotFound("Not Found".into()));
        }
        return Ok(Lookup::Found(countries));
    }

    if v.get("message").and_then(Value::as_str).is_some() {
        let msg: ApiMessage = serde_json::from_value(v)?;
        return Ok(Lookup::NotFound(msg.message));
    }

    let kind = match &v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Object(_) => "object without message",
        Value::Array(_) => "array",
    };
    Err(Error::UnexpectedShape(format!(
        "expected an array of countries or a message object, got {kind}"
    )))
}
