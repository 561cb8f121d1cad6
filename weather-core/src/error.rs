use thiserror::Error;

/// Which upstream OpenWeather endpoint a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocoding,
    Current,
    Forecast,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::Current => "current weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request failures of a city lookup.
///
/// None of these are fatal to the serving process; the web layer maps every
/// variant onto the error page.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Geocoding returned no candidates for the place name.
    #[error("No location found for '{0}'")]
    UnresolvablePlace(String),

    /// The provider answered with a non-success status.
    #[error("OpenWeather {endpoint} request failed with status {status}")]
    Upstream { endpoint: Endpoint, status: u16 },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("Failed to reach OpenWeather ({endpoint}): {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered successfully but the payload lacked expected fields.
    #[error("Malformed OpenWeather {endpoint} data: {reason}")]
    MalformedData { endpoint: Endpoint, reason: String },
}

impl LookupError {
    /// Upstream HTTP status, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unresolvable(&self) -> bool {
        matches!(self, LookupError::UnresolvablePlace(_))
    }
}

/// Startup-time misconfiguration. The process must not serve requests with it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No OpenWeather API key configured.\n\
         Hint: set OWM_API_KEY or run `weather configure` and enter your API key."
    )]
    MissingApiKey,

    #[error("Invalid HTTP client configuration: {0}")]
    HttpClient(#[source] reqwest::Error),
}
