use std::fmt;
use std::time::Duration;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Non-2xx response from the Keystone API.
    Api { status: u16, body: String },
    /// Polling exceeded the configured timeout without a terminal status.
    Timeout { elapsed: Duration, limit: Duration },
    /// No API key given on the command line or in the environment.
    MissingApiKey,
    Connection(String),
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Api { status, body } => write!(f, "{} - {}", status, body),
            Error::Timeout { elapsed, limit } => write!(
                f,
                "Suite run did not complete within {} seconds (waited {} seconds)",
                limit.as_secs(),
                elapsed.as_secs()
            ),
            Error::MissingApiKey => {
                write!(f, "KEYSTONE_API_KEY environment variable not set and no --api-key given")
            }
            Error::Connection(message) => write!(f, "Connection failed: {}", message),
            Error::Decode(message) => write!(f, "Cannot decode response: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Connection(e.to_string())
    }
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::Connection(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}
