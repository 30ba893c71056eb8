use std::str::FromStr;

use url::Url;

use super::Query;

/// Which map rotation payload to request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapRotationVersion {
    /// Battle royale pubs only.
    BattleRoyale = 1,
    /// Every mode.
    #[default]
    AllModes = 2,
}
impl std::fmt::Display for MapRotationVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)?;
        Ok(())
    }
}
impl FromStr for MapRotationVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MapRotationVersion::BattleRoyale),
            "2" => Ok(MapRotationVersion::AllModes),
            _ => Err(format!("unknown map rotation version '{}', expected 1 or 2", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MapRotationQuery {
    pub version: MapRotationVersion,
}

impl MapRotationQuery {
    pub fn with_version(mut self, version: MapRotationVersion) -> Self {
        self.version = version;
        self
    }
}

impl Query for MapRotationQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("version", &self.version.to_string());
        url
    }
}
