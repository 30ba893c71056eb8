//! Async client for the Apex Legends Status API (`api.mozambiquehe.re`).
//!
//! Every operation returns the remote JSON body untouched as a
//! [`serde_json::Value`].

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::{Argument, Error};
pub use self::query::{
    HistoryAction, MapRotationQuery, MapRotationVersion, MatchHistoryQuery, NewsQuery, PlayerId,
    PlayerQuery, Query, DEFAULT_NEWS_LANG,
};
pub use self::types::{Endpoint, Platform};
