use country_lookup::models::{CallingCode, CountrySummary};
use country_lookup::normalize::{normalize, FieldValue, FIELD_COUNT};

fn sample() -> CountrySummary {
    serde_json::from_str(
        r#"{
        "name": {"common": "Switzerland"},
        "flags": {"png": "https://flagcdn.com/w320/ch.png"},
        "capital": ["Bern"],
        "continents": ["Europe"],
        "population": 8654622,
        "currencies": {"CHF": {"name": "Swiss franc", "symbol": "Fr."}},
        "languages": {"fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh"},
        "borders": ["AUT", "FRA", "ITA", "LIE", "DEU"],
        "area": 41284.0,
        "idd": {"root": "+4", "suffixes": ["1"]},
        "capitalInfo": {"latlng": [46.92, 7.47]},
        "timezones": ["UTC+01:00"]
    }"#,
    )
    .unwrap()
}

#[test]
fn always_eleven_fields_in_fixed_order() {
    let labels: Vec<_> = normalize(Some(&sample())).iter().map(|f| f.label).collect();
    assert_eq!(labels.len(), FIELD_COUNT);
    assert_eq!(
        labels,
        vec![
            "",
            "Capital",
            "Continent",
            "Population",
            "Currency",
            "Common Languages",
            "Borders",
            "Area",
            "Calling Code",
            "Capital Latitude and Longitude",
            "Timezones",
        ]
    );
}

#[test]
fn full_record_payloads() {
    let fields = normalize(Some(&sample()));
    assert_eq!(
        fields[0].value,
        FieldValue::Image {
            url: Some("https://flagcdn.com/w320/ch.png".into())
        }
    );
    assert_eq!(
        fields[3].value,
        FieldValue::TextList {
            items: vec!["8,654,622".into()]
        }
    );
    assert_eq!(
        fields[4].value,
        FieldValue::Currency {
            name: "Swiss franc".into(),
            code: "CHF".into()
        }
    );
    assert_eq!(
        fields[5].value,
        FieldValue::LanguageList {
            joined: "French, Swiss German, Italian, Romansh".into()
        }
    );
    assert_eq!(
        fields[7].value,
        FieldValue::TextList {
            items: vec!["41,284 km²".into()]
        }
    );
    assert_eq!(
        fields[8].value,
        FieldValue::CallingCode {
            root: "+4".into(),
            suffix: "1".into()
        }
    );
    assert_eq!(
        fields[9].value,
        FieldValue::TextList {
            items: vec!["46.92".into(), "7.47".into()]
        }
    );
}

#[test]
fn empty_currencies_give_empty_currency() {
    let mut c = sample();
    c.currencies.clear();
    let fields = normalize(Some(&c));
    assert_eq!(
        fields[4].value,
        FieldValue::Currency {
            name: String::new(),
            code: String::new()
        }
    );
}

#[test]
fn missing_collections_do_not_panic() {
    let mut c = sample();
    c.languages.clear();
    c.timezones.clear();
    c.calling_code = None;
    c.capital_info = None;
    c.population = None;
    let fields = normalize(Some(&c));
    assert_eq!(fields.len(), FIELD_COUNT);
    assert_eq!(
        fields[5].value,
        FieldValue::LanguageList {
            joined: String::new()
        }
    );
    assert_eq!(
        fields[8].value,
        FieldValue::CallingCode {
            root: String::new(),
            suffix: String::new()
        }
    );
    assert_eq!(fields[10].value, FieldValue::TextList { items: vec![] });
    assert_eq!(fields[3].value, FieldValue::TextList { items: vec![] });
}

#[test]
fn calling_code_without_suffixes_uses_root_only() {
    let mut c = sample();
    c.calling_code = Some(CallingCode {
        root: Some("+1".into()),
        suffixes: vec![],
    });
    assert_eq!(
        normalize(Some(&c))[8].value,
        FieldValue::CallingCode {
            root: "+1".into(),
            suffix: String::new()
        }
    );
}

#[test]
fn multiple_currencies_pick_first_by_code() {
    let c: CountrySummary = serde_json::from_str(
        r#"{"name":{"common":"Panama"},
            "currencies":{"USD":{"name":"United States dollar"},"PAB":{"name":"Panamanian balboa"}}}"#,
    )
    .unwrap();
    assert_eq!(
        normalize(Some(&c))[4].value,
        FieldValue::Currency {
            name: "Panamanian balboa".into(),
            code: "PAB".into()
        }
    );
}

#[test]
fn absent_country_yields_placeholders() {
    let fields = normalize(None);
    assert_eq!(fields.len(), FIELD_COUNT);
    assert_eq!(fields[0].value, FieldValue::Image { url: None });
}

#[test]
fn fields_serialize_with_kind_tag() {
    let v = serde_json::to_value(normalize(Some(&sample()))).unwrap();
    assert_eq!(v[4]["kind"], "currency");
    assert_eq!(v[4]["label"], "Currency");
    assert_eq!(v[4]["code"], "CHF");
    assert_eq!(v[1]["kind"], "text_list");
}
