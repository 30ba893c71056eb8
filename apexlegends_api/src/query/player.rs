//! Player lookups against the `bridge` and `nametouid` endpoints.

use url::Url;

use crate::{errors::Argument, types::Platform, Error};

use super::Query;

/// How a player is identified: by display name or by platform UID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerId {
    Name(String),
    Uid(String),
}

/// A player on a platform.
///
/// The platform is kept as the caller's raw string and checked in
/// [`Query::validate`], so callers forwarding user input get the API's
/// error messages rather than a parse failure of their own.
#[derive(Clone, Debug)]
pub struct PlayerQuery {
    pub player: PlayerId,
    pub platform: String,
}

impl PlayerQuery {
    pub fn by_name(player_name: &str, platform: impl AsRef<str>) -> Self {
        Self {
            player: PlayerId::Name(player_name.to_string()),
            platform: platform.as_ref().to_string(),
        }
    }

    pub fn by_uid(player_uid: &str, platform: impl AsRef<str>) -> Self {
        Self {
            player: PlayerId::Uid(player_uid.to_string()),
            platform: platform.as_ref().to_string(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform.to_string();
        self
    }

    /// Parses the platform string.
    pub fn platform(&self) -> Result<Platform, Error> {
        self.platform.parse()
    }
}

impl Query for PlayerQuery {
    fn validate(&self) -> Result<(), Error> {
        match &self.player {
            PlayerId::Name(name) if name.is_empty() => {
                return Err(Error::MissingArgument(Argument::PlayerName))
            }
            PlayerId::Uid(uid) if uid.is_empty() => {
                return Err(Error::MissingArgument(Argument::PlayerUid))
            }
            _ => {}
        }
        self.platform()?;
        Ok(())
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let (key, value) = match &self.player {
            PlayerId::Name(name) => ("player", name),
            PlayerId::Uid(uid) => ("uid", uid),
        };
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair(key, value)
            .append_pair("platform", &self.platform);
        url
    }
}
