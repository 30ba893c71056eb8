//! Error types for the API client.

use std::fmt;

/// A required query argument, named in [`Error::MissingArgument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argument {
    PlayerName,
    PlayerUid,
    Platform,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Argument::PlayerName => "player name",
            Argument::PlayerUid => "player UID",
            Argument::Platform => "platform",
        })
    }
}

/// Errors that can occur when making API requests.
///
/// Validation variants are returned before any request is sent. Transport
/// failures carry the underlying `reqwest` error untouched.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was built without an API key (or with an empty one).
    #[error("No API key provided")]
    MissingApiKey,
    /// A required argument was empty.
    #[error("No {0} provided")]
    MissingArgument(Argument),
    /// The platform was not one of the accepted literals. Holds the rejected input.
    #[error("Platform must be one of the following: PC, PS4, X1")]
    InvalidPlatform(String),
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// Connection failure, unreadable body or a body that is not JSON.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
