//! Presentational output for display fields.

use crate::models::CountrySummary;
use crate::normalize::{normalize, DisplayField, FieldValue};
use std::fmt;

/// Text shown for a field whose payload is empty.
pub const PLACEHOLDER: &str = "n/a";

/// What a view should draw for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Image { url: String },
    Labeled { label: String, text: String },
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Image { url } => write!(f, "Flag: {url}"),
            Rendered::Labeled { label, text } => write!(f, "{label}: {text}"),
        }
    }
}

fn or_placeholder(s: String) -> String {
    if s.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        s
    }
}

/// Render one field. An image without URL renders nothing.
pub fn render(field: &DisplayField) -> Option<Rendered> {
    let text = match &field.value {
        FieldValue::Image { url } => {
            return url
                .as_ref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| Rendered::Image { url: u.clone() });
        }
        FieldValue::TextList { items } => items.join(", "),
        FieldValue::CallingCode { root, suffix } => format!("{root}{suffix}"),
        FieldValue::LanguageList { joined } => joined.clone(),
        FieldValue::Currency { name, code } => match (name.is_empty(), code.is_empty()) {
            (true, true) => String::new(),
            (false, true) => name.clone(),
            (true, false) => code.clone(),
            (false, false) => format!("{name}-{code}"),
        },
    };
    Some(Rendered::Labeled {
        label: field.label.to_string(),
        text: or_placeholder(text),
    })
}

/// Normalize and render a whole country.
pub fn render_country(country: &CountrySummary) -> Vec<Rendered> {
    normalize(Some(country)).iter().filter_map(render).collect()
}
