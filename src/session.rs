//! Runs [`SearchController`] effects against a [`CountrySource`].
//!
//! Network effects run on background threads and report back over a channel,
//! the same way the desktop app keeps its UI responsive. The owner calls
//! [`Session::poll`] (every frame) or [`Session::wait_idle`] (CLI, tests) to
//! feed completions into the controller.

use crate::api::Client;
use crate::controller::{Effect, SearchController};
use crate::error::{Error, Result};
use crate::models::Lookup;
use crate::query::QueryParams;
use log::debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Where country data comes from. [`Client`] is the real implementation.
pub trait CountrySource: Send + Sync + 'static {
    fn country_names(&self) -> Result<Vec<String>>;
    fn lookup(&self, name: &str) -> Result<Lookup>;
}

impl CountrySource for Client {
    fn country_names(&self) -> Result<Vec<String>> {
        Client::country_names(self)
    }

    fn lookup(&self, name: &str) -> Result<Lookup> {
        Client::lookup(self, name)
    }
}

#[derive(Debug)]
enum Completion {
    CountryList(Result<Vec<String>>),
    Country { ticket: u64, result: Result<Lookup> },
}

pub struct Session<S: CountrySource> {
    controller: SearchController,
    source: Arc<S>,
    params: QueryParams,
    load_suggestions: bool,
    in_flight: usize,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
}

impl<S: CountrySource> Session<S> {
    pub fn new(source: S, params: QueryParams) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            controller: SearchController::new(),
            source: Arc::new(source),
            params,
            load_suggestions: true,
            in_flight: 0,
            sender,
            receiver,
        }
    }

    /// Skip the master-list fetch (the CLI `show` command has no use for it).
    pub fn without_suggestions(mut self) -> Self {
        self.load_suggestions = false;
        self
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    /// Current value of the shareable query parameter.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Number of requests that have not reported back yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn start(&mut self) {
        let effects = self.controller.startup(&self.params);
        self.execute(effects);
    }

    pub fn submit(&mut self, text: &str) {
        let effects = self.controller.submit(text);
        self.execute(effects);
    }

    pub fn pick_suggestion(&mut self, name: &str) {
        let effects = self.controller.pick_suggestion(name);
        self.execute(effects);
    }

    pub fn type_input(&mut self, text: &str) {
        self.controller.type_input(text);
    }

    pub fn close_suggestions(&mut self) {
        self.controller.close_suggestions();
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::WriteQueryParam(country) => {
                    self.params.set_country(country);
                    debug!("query parameter is now '{}'", self.params);
                }
                Effect::FetchCountryList => {
                    if !self.load_suggestions {
                        continue;
                    }
                    let source = Arc::clone(&self.source);
                    let on_panic = Completion::CountryList(Err(Error::WorkerPanicked(
                        "the country list".into(),
                    )));
                    self.spawn(
                        move || Completion::CountryList(source.country_names()),
                        on_panic,
                    );
                }
                Effect::FetchCountry { name, ticket } => {
                    let source = Arc::clone(&self.source);
                    let on_panic = Completion::Country {
                        ticket,
                        result: Err(Error::WorkerPanicked(format!("'{name}'"))),
                    };
                    self.spawn(
                        move || Completion::Country {
                            ticket,
                            result: source.lookup(&name),
                        },
                        on_panic,
                    );
                }
            }
        }
    }

    /// Run `job` on a worker thread. If it panics, `on_panic` is reported
    /// instead so `in_flight` always counts down.
    fn spawn<F>(&mut self, job: F, on_panic: Completion)
    where
        F: FnOnce() -> Completion + Send + 'static,
    {
        self.in_flight += 1;
        let sender = self.sender.clone();
        thread::spawn(move || {
            let completion = panic::catch_unwind(AssertUnwindSafe(job)).unwrap_or_else(|_| {
                log::error!("background request panicked");
                on_panic
            });
            // The receiver only goes away together with the session.
            let _ = sender.send(completion);
        });
    }

    fn apply(&mut self, completion: Completion) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match completion {
            Completion::CountryList(result) => {
                self.controller.apply_country_list(result);
                true
            }
            Completion::Country { ticket, result } => self.controller.apply_lookup(ticket, result),
        }
    }

    /// Apply every completion that has arrived. Returns `true` if state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.receiver.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Block until every outstanding request has reported back.
    pub fn wait_idle(&mut self) {
        while self.in_flight > 0 {
            match self.receiver.recv() {
                Ok(completion) => {
                    self.apply(completion);
                }
                Err(_) => break,
            }
        }
    }
}
