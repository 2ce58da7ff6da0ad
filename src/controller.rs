//! Search state machine.
//!
//! [`SearchController`] owns the search text, the suggestion list and the
//! phase of the current lookup. Every transition is synchronous and returns
//! the side effects the caller has to perform ([`Effect`]); results are fed
//! back with [`SearchController::apply_lookup`] and
//! [`SearchController::apply_country_list`]. Nothing in here touches the
//! network, so the whole flow is testable without a UI.
//!
//! Each detail fetch carries a ticket. Only the newest ticket is accepted,
//! so when two searches overlap the later search wins regardless of which
//! response arrives first. Clearing the input also retires the outstanding
//! ticket.

use crate::error::Error;
use crate::filter::OptionFilter;
use crate::models::{CountrySummary, Lookup};
use crate::query::QueryParams;
use log::{info, warn};

pub const DEFAULT_COUNTRY: &str = "India";

/// Work the owner of the controller must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the master list of country names (once, at startup).
    FetchCountryList,
    /// Look up a country; hand the result back with the same ticket.
    FetchCountry { name: String, ticket: u64 },
    /// Mirror a confirmed search into the shareable `country` parameter.
    WriteQueryParam(String),
}

/// Phase of the detail lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Nothing requested, or results were cleared.
    #[default]
    Idle,
    Loading,
    Loaded(Vec<CountrySummary>),
    /// The API answered with a message instead of records.
    NotFound(String),
    /// Transport or decoding failure.
    Failed(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn countries(&self) -> &[CountrySummary] {
        match self {
            Phase::Loaded(list) => list,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub is_suggestion_list_open: bool,
    pub suggestion_options: Vec<String>,
}

#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    phase: Phase,
    filter: OptionFilter,
    /// Set when loading the master list failed.
    suggestion_error: Option<String>,
    /// Newest ticket handed out; `0` means none yet.
    ticket: u64,
    /// Ticket of the fetch whose result is still wanted.
    pending: Option<u64>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn suggestion_error(&self) -> Option<&str> {
        self.suggestion_error.as_deref()
    }

    /// True while a detail fetch is outstanding.
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    fn next_ticket(&mut self) -> u64 {
        self.ticket += 1;
        self.ticket
    }

    fn begin_lookup(&mut self, name: &str) -> Effect {
        let ticket = self.next_ticket();
        self.pending = Some(ticket);
        self.phase = Phase::Loading;
        info!("looking up '{name}' (ticket {ticket})");
        Effect::FetchCountry {
            name: name.to_string(),
            ticket,
        }
    }

    fn refresh_suggestions(&mut self) {
        self.state.suggestion_options = self.filter.filter(&self.state.query);
    }

    /// Seed the search from the shareable parameter, falling back to
    /// [`DEFAULT_COUNTRY`]. The fallback is written back as the canonical value.
    pub fn startup(&mut self, params: &QueryParams) -> Vec<Effect> {
        let mut effects = Vec::new();
        let country = match params.country() {
            Some(c) => c.to_string(),
            None => {
                effects.push(Effect::WriteQueryParam(DEFAULT_COUNTRY.to_string()));
                DEFAULT_COUNTRY.to_string()
            }
        };
        self.state.query = country.clone();
        self.state.is_suggestion_list_open = false;
        effects.push(self.begin_lookup(&country));
        effects.push(Effect::FetchCountryList);
        effects
    }

    /// Form submission. Blank text is ignored; otherwise the input takes the
    /// trimmed text. The suggestion list closes once the lookup completes.
    pub fn submit(&mut self, text: &str) -> Vec<Effect> {
        let name = text.trim();
        if name.is_empty() {
            return Vec::new();
        }
        if self.state.query != name {
            self.state.query = name.to_string();
            self.refresh_suggestions();
        }
        vec![
            Effect::WriteQueryParam(name.to_string()),
            self.begin_lookup(name),
        ]
    }

    /// A suggestion was chosen: same as [`submit`](Self::submit), but the list
    /// closes right away and the input takes the chosen name.
    pub fn pick_suggestion(&mut self, name: &str) -> Vec<Effect> {
        if name.trim().is_empty() {
            return Vec::new();
        }
        self.state.query = name.to_string();
        self.state.is_suggestion_list_open = false;
        self.refresh_suggestions();
        self.submit(name)
    }

    /// A keystroke. Never fetches and never writes the query parameter.
    pub fn type_input(&mut self, text: &str) {
        self.state.query = text.to_string();
        self.refresh_suggestions();
        if text.is_empty() {
            self.state.is_suggestion_list_open = false;
            self.phase = Phase::Idle;
            self.pending = None;
        } else {
            self.state.is_suggestion_list_open = true;
        }
    }

    pub fn close_suggestions(&mut self) {
        self.state.is_suggestion_list_open = false;
    }

    /// Result of [`Effect::FetchCountryList`].
    pub fn apply_country_list(&mut self, result: Result<Vec<String>, Error>) {
        match result {
            Ok(names) => {
                info!("loaded {} country names", names.len());
                self.filter.initialize(names);
                self.suggestion_error = None;
            }
            Err(err) => {
                warn!("country list unavailable: {err}");
                self.suggestion_error = Some(format!("Suggestions unavailable: {err}"));
            }
        }
        self.refresh_suggestions();
    }

    /// Result of [`Effect::FetchCountry`]. Returns `false` when the ticket is
    /// stale and the result was dropped.
    pub fn apply_lookup(&mut self, ticket: u64, result: Result<Lookup, Error>) -> bool {
        if self.pending != Some(ticket) {
            warn!("dropping stale lookup result (ticket {ticket})");
            return false;
        }
        self.pending = None;
        self.phase = match result {
            Ok(Lookup::Found(countries)) => Phase::Loaded(countries),
            Ok(Lookup::NotFound(message)) => Phase::NotFound(message),
            Err(err) if err.is_network() => {
                warn!("lookup failed, service unreachable: {err}");
                Phase::Failed(format!("Country service unreachable: {err}"))
            }
            Err(err) => {
                warn!("lookup failed: {err}");
                Phase::Failed(err.to_string())
            }
        };
        self.state.is_suggestion_list_open = false;
        true
    }
}
