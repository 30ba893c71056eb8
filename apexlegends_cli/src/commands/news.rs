use anyhow::Result;
use apexlegends_api::{Client, NewsQuery, DEFAULT_NEWS_LANG};
use clap::Args;

use super::redact_url;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct NewsArgs {
    /// News language (e.g. en-US, fr-FR, de-DE)
    #[arg(long, default_value = DEFAULT_NEWS_LANG)]
    pub lang: String,
}

pub async fn run(args: &NewsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = NewsQuery::default().with_lang(&args.lang);
    let resp = client.get_news_with(&query).await.map_err(redact_url)?;
    print_value(&resp, format);
    Ok(())
}
