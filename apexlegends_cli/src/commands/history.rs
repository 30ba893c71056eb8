use anyhow::Result;
use apexlegends_api::{Client, HistoryAction, MatchHistoryQuery};
use clap::Args;

use super::redact_url;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct HistoryArgs {
    /// Player name
    #[arg(long)]
    pub name: String,

    /// Platform: PC, PS4 or X1
    #[arg(long)]
    pub platform: String,

    /// Tracking action: info, get, delete, add
    #[arg(long, default_value = "info")]
    pub action: HistoryAction,
}

pub async fn run(args: &HistoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = MatchHistoryQuery::new(&args.name, &args.platform).with_action(args.action);
    let resp = client.get_match_history(&query).await.map_err(redact_url)?;
    print_value(&resp, format);
    Ok(())
}
