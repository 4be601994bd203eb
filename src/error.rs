// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-level error type.
///
/// Variants carry plain strings so errors stay `Clone` and can travel
/// through Iced messages.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport-level HTTP failure (connection refused, timeout, bad TLS).
    Http(String),
    /// The backend answered with a non-success status.
    Api {
        status: u16,
        detail: String,
    },
}

impl Error {
    /// Short, user-presentable summary suitable for a toast message.
    ///
    /// Backend errors are the only ones that reach toasts: transport
    /// failures get a generic line, API errors surface the backend's
    /// `detail`. Anything else falls back to its display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::Http(_) => "Could not reach the server".to_string(),
            Error::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api { status, detail } => write!(f, "API Error ({}): {}", status, detail),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
