//! CLI subcommand implementations.

use apexlegends_api::Error;

pub mod history;
pub mod map_rotation;
pub mod name_to_uid;
pub mod news;
pub mod player;
pub mod servers;

/// Strips the request URL from transport errors before they are printed.
/// The URL carries the API key in its `auth` parameter.
pub fn redact_url(err: Error) -> Error {
    match err {
        Error::Transport(e) => Error::Transport(e.without_url()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use apexlegends_api::{Client, Error};

    use super::*;

    const KEY: &str = "SUPERSECRET123";

    fn unreachable_client() -> Client {
        // Nothing listens on port 1.
        Client::with_base_url("http://127.0.0.1:1/", Some(KEY.to_string())).unwrap()
    }

    #[tokio::test]
    async fn redact_url_hides_api_key() {
        let client = unreachable_client();

        let raw = client.get_predators().await.unwrap_err();
        assert!(raw.to_string().contains(KEY));

        let err = client.get_predators().await.map_err(redact_url).unwrap_err();
        assert!(matches!(err, Error::Transport(ref e) if e.is_connect() && e.url().is_none()));
        assert!(!err.to_string().contains(KEY));
        assert!(!format!("{:?}", err).contains(KEY));
    }

    #[tokio::test]
    async fn command_errors_do_not_leak_api_key() {
        let client = unreachable_client();
        let format = crate::output::OutputFormat::Json;

        let args = name_to_uid::NameToUidArgs {
            name: "Daltoosh".to_string(),
            platform: "PC".to_string(),
        };
        let err = name_to_uid::run(&args, &client, &format).await.unwrap_err();
        assert!(!format!("{:#}", err).contains(KEY));

        let mut notice = Vec::new();
        let err = servers::run(&client, &format, &mut notice).await.unwrap_err();
        assert!(!format!("{:#}", err).contains(KEY));
        assert!(notice.is_empty());
    }

    #[test]
    fn redact_url_keeps_validation_errors() {
        let err = redact_url(Error::MissingApiKey);
        assert_eq!(err.to_string(), "No API key provided");
    }
}
