//! Error types for hero media selection
//!
//! Only construction can fail. Runtime failures (probe errors, playback
//! refusals) are absorbed where they occur and never reach this enum.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
