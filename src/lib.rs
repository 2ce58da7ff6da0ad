//! country_lookup
//!
//! Look up country profiles from the public REST Countries API and turn them
//! into display-ready fields. Pairs with the `country-lookup` CLI and the
//! `country-lookup-gui` desktop app.
//!
//! ### Features
//! - Fetch a country by exact name, or the list of all country names
//! - Normalize partially populated records into a fixed set of display fields
//! - Case-insensitive autocomplete over the country list
//! - A UI-independent search controller synchronized with a shareable
//!   `country=<name>` query parameter
//!
//! ### Example
//! ```no_run
//! use country_lookup::{Client, QueryParams, Session};
//!
//! let mut session = Session::new(Client::default(), QueryParams::parse("country=Japan")?);
//! session.start();
//! session.wait_idle();
//! for country in session.controller().phase().countries() {
//!     for line in country_lookup::render::render_country(country) {
//!         println!("{line}");
//!     }
//! }
//! # Ok::<(), country_lookup::Error>(())
//! ```

pub mod api;
pub mod controller;
pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod query;
pub mod render;
pub mod session;

pub use api::{Client, ClientConfig};
pub use controller::{Effect, Phase, SearchController, SearchState};
pub use error::{Error, Result};
pub use filter::OptionFilter;
pub use models::{CountrySummary, Lookup};
pub use normalize::{DisplayField, FieldValue};
pub use query::QueryParams;
pub use render::Rendered;
pub use session::{CountrySource, Session};
