//! Turn a raw [`CountrySummary`] into the fixed, ordered list of display fields.
//!
//! The output always has [`FIELD_COUNT`] entries in this order: flag, capital,
//! continent, population, currency, languages, borders, area, calling code,
//! capital coordinates, timezones. Absent data becomes an empty payload; the
//! renderer decides how empty payloads look.

use crate::models::CountrySummary;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;

pub const FIELD_COUNT: usize = 11;

/// Typed payload of a display field. The five kinds are closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldValue {
    Image { url: Option<String> },
    TextList { items: Vec<String> },
    CallingCode { root: String, suffix: String },
    LanguageList { joined: String },
    Currency { name: String, code: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayField {
    pub label: &'static str,
    #[serde(flatten)]
    pub value: FieldValue,
}

impl DisplayField {
    fn new(label: &'static str, value: FieldValue) -> Self {
        Self { label, value }
    }

    fn text(label: &'static str, items: Vec<String>) -> Self {
        Self::new(label, FieldValue::TextList { items })
    }
}

fn non_empty(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format an area in square kilometres, e.g. `3,287,590 km²` or `0.44 km²`.
pub fn format_area(km2: f64) -> String {
    if !km2.is_finite() || km2 < 0.0 {
        return String::new();
    }
    // Up to two decimals, trailing zeros trimmed.
    let cents = (km2 * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    match cents % 100 {
        0 => format!("{whole} km²"),
        rem if rem % 10 == 0 => format!("{whole}.{} km²", rem / 10),
        rem => format!("{whole}.{rem:02} km²"),
    }
}

fn format_coordinate(v: f64) -> String {
    let s = format!("{:.4}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Normalize one country (or nothing) into exactly [`FIELD_COUNT`] display fields.
pub fn normalize(country: Option<&CountrySummary>) -> Vec<DisplayField> {
    let Some(c) = country else {
        return placeholder_fields();
    };

    let (currency_code, currency_name) = match c.first_currency() {
        Some((code, cur)) => (code.to_string(), cur.name.clone().unwrap_or_default()),
        None => (String::new(), String::new()),
    };

    let languages = c
        .languages
        .values()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let (idd_root, idd_suffix) = match &c.calling_code {
        Some(idd) => (
            idd.root.clone().unwrap_or_default(),
            idd.first_suffix().unwrap_or_default().to_string(),
        ),
        None => (String::new(), String::new()),
    };

    let coordinates = c
        .capital_coordinates()
        .map(|p| {
            vec![
                format_coordinate(p.latitude),
                format_coordinate(p.longitude),
            ]
        })
        .unwrap_or_default();

    vec![
        DisplayField::new(
            "",
            FieldValue::Image {
                url: c.flag_image_url().map(str::to_string),
            },
        ),
        DisplayField::text("Capital", non_empty(&c.capitals)),
        DisplayField::text("Continent", non_empty(&c.continents)),
        DisplayField::text(
            "Population",
            c.population
                .map(|p| p.to_formatted_string(&Locale::en))
                .into_iter()
                .collect(),
        ),
        DisplayField::new(
            "Currency",
            FieldValue::Currency {
                name: currency_name,
                code: currency_code,
            },
        ),
        DisplayField::new(
            "Common Languages",
            FieldValue::LanguageList { joined: languages },
        ),
        DisplayField::text("Borders", non_empty(&c.borders)),
        DisplayField::text(
            "Area",
            c.area_square_km
                .map(format_area)
                .filter(|s| !s.is_empty())
                .into_iter()
                .collect(),
        ),
        DisplayField::new(
            "Calling Code",
            FieldValue::CallingCode {
                root: idd_root,
                suffix: idd_suffix,
            },
        ),
        DisplayField::text("Capital Latitude and Longitude", coordinates),
        DisplayField::text("Timezones", non_empty(&c.timezones)),
    ]
}

fn placeholder_fields() -> Vec<DisplayField> {
    vec![
        DisplayField::new("", FieldValue::Image { url: None }),
        DisplayField::text("Capital", Vec::new()),
        DisplayField::text("Continent", Vec::new()),
        DisplayField::text("Population", Vec::new()),
        DisplayField::new(
            "Currency",
            FieldValue::Currency {
                name: String::new(),
                code: String::new(),
            },
        ),
        DisplayField::new(
            "Common Languages",
            FieldValue::LanguageList {
                joined: String::new(),
            },
        ),
        DisplayField::text("Borders", Vec::new()),
        DisplayField::text("Area", Vec::new()),
        DisplayField::new(
            "Calling Code",
            FieldValue::CallingCode {
                root: String::new(),
                suffix: String::new(),
            },
        ),
        DisplayField::text("Capital Latitude and Longitude", Vec::new()),
        DisplayField::text("Timezones", Vec::new()),
    ]
}
