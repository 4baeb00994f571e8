// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Crate-level error.
///
/// Variants carry rendered messages rather than source errors so the type
/// stays `Clone` and can travel inside iced messages.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

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

pub type Result<T> = std::result::Result<T, Error>;
