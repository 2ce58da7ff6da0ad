use country_lookup::api::{parse_country_names, parse_lookup};
use country_lookup::{Error, Lookup};

const INDIA: &str = r#"
[
  {
    "name": {"common": "India", "official": "Republic of India"},
    "flags": {"png": "https://flagcdn.com/w320/in.png", "svg": "https://flagcdn.com/in.svg"},
    "capital": ["New Delhi"],
    "continents": ["Asia"],
    "population": 1380004385,
    "currencies": {"INR": {"name": "Indian rupee", "symbol": "₹"}},
    "languages": {"eng": "English", "hin": "Hindi", "tam": "Tamil"},
    "borders": ["BGD", "BTN", "MMR", "CHN", "NPL", "PAK"],
    "area": 3287590.0,
    "idd": {"root": "+9", "suffixes": ["1"]},
    "capitalInfo": {"latlng": [28.6, 77.2]},
    "timezones": ["UTC+05:30"]
  }
]
"#;

#[test]
fn parse_full_record() {
    let Lookup::Found(countries) = parse_lookup(INDIA).unwrap() else {
        panic!("expected a country");
    };
    assert_eq!(countries.len(), 1);
    let india = &countries[0];
    assert_eq!(india.display_name(), "India");
    assert_eq!(india.name.official, "Republic of India");
    assert_eq!(india.capitals, vec!["New Delhi"]);
    assert_eq!(india.population, Some(1_380_004_385));
    assert_eq!(india.area_square_km, Some(3_287_590.0));
    assert_eq!(india.flag_image_url(), Some("https://flagcdn.com/w320/in.png"));
    let idd = india.calling_code.as_ref().unwrap();
    assert_eq!(idd.root.as_deref(), Some("+9"));
    assert_eq!(idd.first_suffix(), Some("1"));
    let coords = india.capital_coordinates().unwrap();
    assert_eq!((coords.latitude, coords.longitude), (28.6, 77.2));
    let (code, cur) = india.first_currency().unwrap();
    assert_eq!(code, "INR");
    assert_eq!(cur.name.as_deref(), Some("Indian rupee"));
}

#[test]
fn message_object_is_not_found() {
    let body = r#"{"status":404,"message":"Not Found"}"#;
    assert_eq!(
        parse_lookup(body).unwrap(),
        Lookup::NotFound("Not Found".into())
    );
}

#[test]
fn empty_array_is_not_found() {
    assert!(matches!(parse_lookup("[]").unwrap(), Lookup::NotFound(_)));
}

#[test]
fn sparse_record_still_parses() {
    // Antarctica-like record: no capital, currencies, languages, borders or timezones.
    let body = r#"[{"name":{"common":"Antarctica"},"continents":["Antarctica"],"idd":{},"capital":null}]"#;
    let Lookup::Found(countries) = parse_lookup(body).unwrap() else {
        panic!("expected a country");
    };
    let c = &countries[0];
    assert!(c.capitals.is_empty());
    assert!(c.currencies.is_empty());
    assert!(c.languages.is_empty());
    assert!(c.timezones.is_empty());
    assert_eq!(c.calling_code.as_ref().unwrap().first_suffix(), None);
    assert!(c.capital_coordinates().is_none());
    assert!(c.flag_image_url().is_none());
}

#[test]
fn invalid_json_is_decode_error() {
    assert!(matches!(parse_lookup("<html>"), Err(Error::Decode(_))));
}

#[test]
fn object_without_message_is_unexpected() {
    assert!(matches!(
        parse_lookup(r#"{"status":500}"#),
        Err(Error::UnexpectedShape(_))
    ));
}

#[test]
fn country_names_are_sorted_and_deduplicated() {
    let body = r#"[
        {"name":{"common":"Ireland"}},
        {"name":{"common":"India"}},
        {"name":{"common":"Indonesia"}},
        {"name":{"common":"India"}},
        {"name":{"common":"  "}}
    ]"#;
    assert_eq!(
        parse_country_names(body).unwrap(),
        vec!["India", "Indonesia", "Ireland"]
    );
}

#[test]
fn nested_nulls_are_dropped_not_fatal() {
    let body = r#"[{
        "name": null,
        "capital": [null, "Bern"],
        "continents": [null],
        "currencies": {"XXX": null, "CHF": {"name": null, "symbol": "Fr."}},
        "languages": {"fra": "French", "deu": null},
        "borders": ["AUT", null],
        "idd": {"root": "+4", "suffixes": [null, "1"]},
        "capitalInfo": {"latlng": [null, 7.47]},
        "timezones": [null]
    }]"#;
    let Lookup::Found(countries) = parse_lookup(body).unwrap() else {
        panic!("expected a country");
    };
    let c = &countries[0];
    assert_eq!(c.display_name(), "");
    assert_eq!(c.capitals, vec!["Bern"]);
    assert!(c.continents.is_empty());
    assert!(c.timezones.is_empty());
    assert_eq!(c.borders, vec!["AUT"]);
    assert_eq!(c.languages.len(), 1);
    let (code, cur) = c.first_currency().unwrap();
    assert_eq!(code, "CHF");
    assert_eq!(cur.name, None);
    assert_eq!(c.calling_code.as_ref().unwrap().first_suffix(), Some("1"));
    assert!(c.capital_coordinates().is_none());

    // Still renders the full set of fields.
    assert_eq!(country_lookup::normalize::normalize(Some(c)).len(), 11);
}

#[test]
fn null_name_fields_default_to_empty() {
    let body = r#"[{"name":{"common":null,"official":"Republic of Nowhere"}}]"#;
    let Lookup::Found(countries) = parse_lookup(body).unwrap() else {
        panic!("expected a country");
    };
    assert_eq!(countries[0].display_name(), "");
    assert_eq!(countries[0].name.official, "Republic of Nowhere");
}
