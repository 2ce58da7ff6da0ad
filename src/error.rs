pub type Result<T> = std::result::Result<T, Error>;

/// Failures while talking to the REST Countries API or decoding its answers.
///
/// A "not found" answer is not an error; it comes back as
/// [`Lookup::NotFound`](crate::models::Lookup::NotFound).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("http client is unavailable (it failed to initialize)")]
    ClientUnavailable,

    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("background request for {0} panicked")]
    WorkerPanicked(String),
}

impl Error {
    /// True for transport-level failures (no answer from the server at all).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
