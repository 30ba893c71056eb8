//! HTTP client for the Apex Legends Status API.

use std::fmt;

use serde_json::Value;
use url::Url;

use crate::{
    query::{
        HistoryAction, MapRotationQuery, MapRotationVersion, MatchHistoryQuery, NewsQuery,
        PlayerQuery, Query,
    },
    types::Endpoint,
    Error,
};

/// Production endpoint of the API.
pub const DEFAULT_BASE_URL: &str = "https://api.mozambiquehe.re/";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Apex Legends Status API.
///
/// Every operation checks the API key and its arguments first and only then
/// sends a single GET. The response body is returned as untyped JSON whatever
/// the HTTP status. No timeout is configured; wrap calls in
/// `tokio::time::timeout` if you need one.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: Option<String>,
    /// Base URL for the API, always ending in `/`. Defaults to [`DEFAULT_BASE_URL`].
    base_url: Url,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    ///
    /// A missing or empty key is accepted here; every request made with such
    /// a client fails with [`Error::MissingApiKey`].
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get_url(&self, endpoint: Endpoint, api_key: &str, query: &impl Query) -> Result<Url, Error> {
        let mut url = self.base_url.join(endpoint.path())?;
        url.query_pairs_mut().append_pair("auth", api_key);
        Ok(query.add_to_url(&url))
    }

    async fn get<Q: Query>(&self, endpoint: Endpoint, query: &Q) -> Result<Value, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        query.validate()?;
        let url = self.get_url(endpoint, api_key, query)?;

        // The URL carries the key, so only the endpoint is logged.
        tracing::debug!(%endpoint, "Sending request");
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!(
                %endpoint,
                connect = e.is_connect(),
                timeout = e.is_timeout(),
                "Failed to get resource"
            );
            e
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%endpoint, %status, "Non-success status, passing body through");
        }

        let body = resp.json::<Value>().await.map_err(|e| {
            tracing::error!(%endpoint, %status, "Failed to parse response body as JSON");
            e
        })?;

        Ok(body)
    }

    /// Fetches the stats of a player by display name.
    pub async fn query_player_by_name(
        &self,
        player_name: &str,
        platform: impl AsRef<str>,
    ) -> Result<Value, Error> {
        self.get_player(&PlayerQuery::by_name(player_name, platform))
            .await
    }

    /// Fetches the stats of a player by UID.
    pub async fn query_player_by_id(
        &self,
        player_uid: &str,
        platform: impl AsRef<str>,
    ) -> Result<Value, Error> {
        self.get_player(&PlayerQuery::by_uid(player_uid, platform))
            .await
    }

    /// Fetches player stats for an already built query.
    pub async fn get_player(&self, query: &PlayerQuery) -> Result<Value, Error> {
        self.get(Endpoint::Bridge, query).await
    }

    /// Runs a match history `action` for a player looked up by name.
    /// `None` runs [`HistoryAction::Info`].
    pub async fn get_player_match_history(
        &self,
        player_name: &str,
        platform: impl AsRef<str>,
        action: Option<HistoryAction>,
    ) -> Result<Value, Error> {
        let query =
            MatchHistoryQuery::new(player_name, platform).with_action(action.unwrap_or_default());
        self.get_match_history(&query).await
    }

    pub async fn get_match_history(&self, query: &MatchHistoryQuery) -> Result<Value, Error> {
        self.get(Endpoint::Bridge, query).await
    }

    /// Fetches the current map pool. `None` requests every mode.
    pub async fn get_map_rotation(
        &self,
        version: Option<MapRotationVersion>,
    ) -> Result<Value, Error> {
        self.get_map_rotation_with(&MapRotationQuery {
            version: version.unwrap_or_default(),
        })
        .await
    }

    pub async fn get_map_rotation_with(&self, query: &MapRotationQuery) -> Result<Value, Error> {
        self.get(Endpoint::MapRotation, query).await
    }

    /// Fetches the RP/AP needed to reach Apex Predator on each platform,
    /// along with the number of Masters.
    pub async fn get_predators(&self) -> Result<Value, Error> {
        self.get(Endpoint::Predator, &()).await
    }

    /// Fetches the current store.
    ///
    /// The provider only serves this endpoint to allow-listed applications.
    pub async fn get_store(&self) -> Result<Value, Error> {
        self.get(Endpoint::Store, &()).await
    }

    /// Fetches news in `lang`, `en-US` when `None`.
    pub async fn get_news(&self, lang: Option<&str>) -> Result<Value, Error> {
        let query = match lang {
            Some(lang) => NewsQuery::default().with_lang(lang),
            None => NewsQuery::default(),
        };
        self.get_news_with(&query).await
    }

    pub async fn get_news_with(&self, query: &NewsQuery) -> Result<Value, Error> {
        self.get(Endpoint::News, query).await
    }

    /// Fetches the current server status.
    ///
    /// The provider requires a link to <https://apexlegendsstatus.com> or a
    /// "Data from apexlegendsstatus.com" notice wherever this data is shown.
    pub async fn get_server_status(&self) -> Result<Value, Error> {
        self.get(Endpoint::Servers, &()).await
    }

    /// Resolves a player name to its UID.
    pub async fn name_to_id(
        &self,
        player_name: &str,
        platform: impl AsRef<str>,
    ) -> Result<Value, Error> {
        self.get(
            Endpoint::NameToUid,
            &PlayerQuery::by_name(player_name, platform),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = Client::with_base_url("http://localhost:1234/api", None).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:1234/api/");

        let client = Client::new(Some("key".to_string())).unwrap();
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Client::with_base_url("not a url", None).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn get_url_puts_auth_first() {
        let client = Client::with_base_url("http://localhost:1234", None).unwrap();
        let url = client
            .get_url(
                Endpoint::NameToUid,
                "secret",
                &PlayerQuery::by_name("Daltoosh", "PC"),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1234/nametouid?auth=secret&player=Daltoosh&platform=PC"
        );
    }

    #[test]
    fn debug_redacts_key() {
        let client = Client::new(Some("secret".to_string())).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
