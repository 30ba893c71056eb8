use anyhow::Result;
use apexlegends_api::{Client, PlayerQuery};
use clap::Args;

use super::redact_url;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct PlayerArgs {
    /// Look up by player name
    #[arg(long, conflicts_with = "uid", required_unless_present = "uid")]
    pub name: Option<String>,

    /// Look up by player UID
    #[arg(long)]
    pub uid: Option<String>,

    /// Platform: PC, PS4 or X1
    #[arg(long)]
    pub platform: String,
}

pub async fn run(args: &PlayerArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = match &args.uid {
        Some(uid) => PlayerQuery::by_uid(uid, &args.platform),
        None => PlayerQuery::by_name(args.name.as_deref().unwrap_or_default(), &args.platform),
    };

    let resp = client.get_player(&query).await.map_err(redact_url)?;
    print_value(&resp, format);

    Ok(())
}
