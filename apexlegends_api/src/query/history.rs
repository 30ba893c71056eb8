use std::str::FromStr;

use url::Url;

use crate::Error;

use super::{PlayerQuery, Query};

/// Match history tracking operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryAction {
    /// Whether the player is tracked, and how many matches are stored.
    #[default]
    Info,
    Get,
    Delete,
    /// Start tracking the player.
    Add,
}
impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HistoryAction::Info => "info",
                HistoryAction::Get => "get",
                HistoryAction::Delete => "delete",
                HistoryAction::Add => "add",
            }
        )?;
        Ok(())
    }
}
impl FromStr for HistoryAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(HistoryAction::Info),
            "get" => Ok(HistoryAction::Get),
            "delete" => Ok(HistoryAction::Delete),
            "add" => Ok(HistoryAction::Add),
            _ => Err(format!(
                "unknown history action '{}', expected one of: info, get, delete, add",
                s
            )),
        }
    }
}

/// Match history of a player looked up by name.
#[derive(Clone, Debug)]
pub struct MatchHistoryQuery {
    pub player: PlayerQuery,
    pub action: HistoryAction,
}

impl MatchHistoryQuery {
    pub fn new(player_name: &str, platform: impl AsRef<str>) -> Self {
        Self {
            player: PlayerQuery::by_name(player_name, platform),
            action: HistoryAction::default(),
        }
    }

    pub fn with_action(mut self, action: HistoryAction) -> Self {
        self.action = action;
        self
    }
}

impl Query for MatchHistoryQuery {
    fn validate(&self) -> Result<(), Error> {
        self.player.validate()
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.player.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("history", "1")
            .append_pair("action", &self.action.to_string());
        url
    }
}
