use anyhow::Result;
use apexlegends_api::{Client, MapRotationQuery, MapRotationVersion};
use clap::Args;

use super::redact_url;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct MapRotationArgs {
    /// Rotation version: 1 (battle royale pubs only) or 2 (all modes)
    #[arg(long, default_value = "2")]
    pub version: MapRotationVersion,
}

pub async fn run(args: &MapRotationArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = MapRotationQuery::default().with_version(args.version);
    let resp = client.get_map_rotation_with(&query).await.map_err(redact_url)?;
    print_value(&resp, format);
    Ok(())
}
