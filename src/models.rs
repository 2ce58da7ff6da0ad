use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serde helper: treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helper: a sequence whose `null` elements are dropped; `null` itself is empty.
fn skip_null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

/// Serde helper: a map whose `null` values are dropped; `null` itself is empty.
fn skip_null_values<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: serde::Deserializer<'de>,
    V: Deserialize<'de>,
{
    let map: Option<BTreeMap<String, Option<V>>> = Option::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect())
}

/// Country names as returned by the API (`name` object).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub common: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub official: String,
}

/// Flag images (`flags` object). Either URL may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// International direct dialing info (`idd` object).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallingCode {
    pub root: Option<String>,
    #[serde(default, deserialize_with = "skip_null_items")]
    pub suffixes: Vec<String>,
}

impl CallingCode {
    /// First suffix, if the API sent any.
    pub fn first_suffix(&self) -> Option<&str> {
        self.suffixes.first().map(String::as_str)
    }
}

/// `capitalInfo` object. `latlng` is `[latitude, longitude]` when present;
/// positions matter, so `null` entries are kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub latlng: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One country record from the `name/{name}` (or `all`) endpoint.
///
/// Every field is optional on the wire; a partially populated record must
/// still deserialize, and `null` entries inside lists and maps are dropped.
/// Maps are ordered by code, so "first currency" is the one with the
/// smallest code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: CountryName,
    pub flags: Option<Flags>,
    #[serde(rename = "capital", default, deserialize_with = "skip_null_items")]
    pub capitals: Vec<String>,
    #[serde(default, deserialize_with = "skip_null_items")]
    pub continents: Vec<String>,
    pub population: Option<u64>,
    #[serde(default, deserialize_with = "skip_null_values")]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default, deserialize_with = "skip_null_values")]
    pub languages: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "skip_null_items")]
    pub borders: Vec<String>,
    #[serde(rename = "area")]
    pub area_square_km: Option<f64>,
    #[serde(rename = "idd")]
    pub calling_code: Option<CallingCode>,
    pub capital_info: Option<CapitalInfo>,
    #[serde(default, deserialize_with = "skip_null_items")]
    pub timezones: Vec<String>,
}

impl CountrySummary {
    pub fn display_name(&self) -> &str {
        &self.name.common
    }

    /// PNG flag if available, otherwise the SVG one.
    pub fn flag_image_url(&self) -> Option<&str> {
        let flags = self.flags.as_ref()?;
        flags
            .png
            .as_deref()
            .or(flags.svg.as_deref())
            .filter(|u| !u.trim().is_empty())
    }

    /// Capital coordinates; `None` unless both latitude and longitude are present.
    pub fn capital_coordinates(&self) -> Option<Coordinates> {
        match self.capital_info.as_ref()?.latlng.as_slice() {
            [Some(latitude), Some(longitude), ..] => Some(Coordinates {
                latitude: *latitude,
                longitude: *longitude,
            }),
            _ => None,
        }
    }

    /// First currency as `(code, currency)`.
    pub fn first_currency(&self) -> Option<(&str, &Currency)> {
        self.currencies
            .iter()
            .next()
            .map(|(code, cur)| (code.as_str(), cur))
    }
}

/// Minimal record shape used for the autocomplete list (`all?fields=name`).
#[derive(Debug, Clone, Deserialize)]
pub struct NameOnly {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: CountryName,
}

/// Error payload returned instead of an array, e.g. `{"status":404,"message":"Not Found"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    pub status: Option<u16>,
}

/// Outcome of a detail lookup that reached the API and got a well-formed answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Vec<CountrySummary>),
    NotFound(String),
}
