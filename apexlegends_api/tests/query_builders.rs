use apexlegends_api::{
    Argument, Error, HistoryAction, MapRotationQuery, MapRotationVersion, MatchHistoryQuery,
    NewsQuery, PlayerId, PlayerQuery, Platform, Query,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/bridge?auth=key").unwrap()
}

#[test]
fn player_query_keeps_existing_pairs() {
    let url = PlayerQuery::by_name("Daltoosh", Platform::Ps4).add_to_url(&base_url());
    assert_eq!(url.query(), Some("auth=key&player=Daltoosh&platform=PS4"));
}

#[test]
fn player_query_by_uid_uses_uid_pair() {
    let query = PlayerQuery::by_uid("1000575688119", "X1");
    assert_eq!(query.player, PlayerId::Uid("1000575688119".to_string()));
    let url = query.add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("uid".to_string(), "1000575688119".to_string())));
    assert!(!pairs.iter().any(|(k, _)| k == "player"));
}

#[test]
fn history_query_defaults_to_info() {
    let query = MatchHistoryQuery::new("Daltoosh", "PC");
    assert_eq!(query.action, HistoryAction::Info);
    let url = query.add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("auth=key&player=Daltoosh&platform=PC&history=1&action=info")
    );
}

#[test]
fn history_query_validates_like_player_query() {
    let err = MatchHistoryQuery::new("Daltoosh", "PS5").validate().unwrap_err();
    assert!(matches!(err, Error::InvalidPlatform(ref p) if p == "PS5"));

    let err = MatchHistoryQuery::new("", "PS5").validate().unwrap_err();
    assert!(matches!(err, Error::MissingArgument(Argument::PlayerName)));
}

#[test]
fn map_rotation_query_defaults() {
    let query = MapRotationQuery::default();
    assert_eq!(query.version, MapRotationVersion::AllModes);
    assert!(query.validate().is_ok());
    let url = query.add_to_url(&base_url());
    assert!(url.query().unwrap().ends_with("version=2"));
}

#[test]
fn news_query_defaults_and_encoding() {
    let query = NewsQuery::default();
    assert_eq!(query.lang, "en-US");

    let url = NewsQuery::default()
        .with_lang("pt BR")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("auth=key&lang=pt+BR"));
}

#[test]
fn unit_query_leaves_url_untouched() {
    let url = ().add_to_url(&base_url());
    assert_eq!(url, base_url());
    assert!(().validate().is_ok());
}
