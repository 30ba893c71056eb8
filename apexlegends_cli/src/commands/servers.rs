use std::io::Write;

use anyhow::Result;
use apexlegends_api::Client;

use super::redact_url;
use crate::output::{print_value, OutputFormat};

/// Attribution the provider requires wherever server status is shown.
pub const ATTRIBUTION: &str = "Data from apexlegendsstatus.com";

pub async fn run(client: &Client, format: &OutputFormat, notice: &mut impl Write) -> Result<()> {
    let resp = client.get_server_status().await.map_err(redact_url)?;
    print_value(&resp, format);
    writeln!(notice, "{}", ATTRIBUTION)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn prints_attribution_after_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/servers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"Origin_login": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), Some("test-key".to_string())).unwrap();
        let mut notice = Vec::new();
        run(&client, &OutputFormat::Json, &mut notice).await.unwrap();

        assert_eq!(String::from_utf8(notice).unwrap(), format!("{}\n", ATTRIBUTION));
    }
}
