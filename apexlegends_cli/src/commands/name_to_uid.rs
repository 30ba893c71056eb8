use anyhow::Result;
use apexlegends_api::Client;
use clap::Args;

use super::redact_url;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct NameToUidArgs {
    /// Player name
    #[arg(long)]
    pub name: String,

    /// Platform: PC, PS4 or X1
    #[arg(long)]
    pub platform: String,
}

pub async fn run(args: &NameToUidArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.name_to_id(&args.name, &args.platform).await.map_err(redact_url)?;
    print_value(&resp, format);
    Ok(())
}
