//! Platforms accepted by the player endpoints.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{errors::Argument, Error};

/// Platform a player account lives on.
///
/// Parsing is case-sensitive: only `PC`, `PS4` and `X1` are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "PS4")]
    Ps4,
    #[serde(rename = "X1")]
    X1,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Pc, Platform::Ps4, Platform::X1];

    /// The literal the API expects in the `platform` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Ps4 => "PS4",
            Platform::X1 => "X1",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(Error::MissingArgument(Argument::Platform)),
            "PC" => Ok(Platform::Pc),
            "PS4" => Ok(Platform::Ps4),
            "X1" => Ok(Platform::X1),
            other => Err(Error::InvalidPlatform(other.to_string())),
        }
    }
}
