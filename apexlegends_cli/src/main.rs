mod commands;
mod output;

use anyhow::Result;
use apexlegends_api::{Client, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};

use crate::commands::redact_url;
use crate::output::{print_value, OutputFormat};

#[derive(Parser)]
#[command(name = "apexlegends")]
#[command(about = "Query Apex Legends player stats and game status from apexlegendsstatus.com")]
struct Cli {
    /// API key for api.mozambiquehe.re
    #[arg(long, env = "APEX_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true, global = true)]
    base_url: String,

    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Player stats by name or UID
    Player(commands::player::PlayerArgs),
    /// Match history tracking for a player
    History(commands::history::HistoryArgs),
    /// Current map rotation
    MapRotation(commands::map_rotation::MapRotationArgs),
    /// RP/AP needed to reach Apex Predator on each platform
    Predators,
    /// Current store (the application must be allow-listed by the provider)
    Store,
    /// Latest news
    News(commands::news::NewsArgs),
    /// Server status
    Servers,
    /// Resolve a player name to its UID
    NameToUid(commands::name_to_uid::NameToUidArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("apexlegends=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let client = Client::with_base_url(&cli.base_url, cli.api_key.clone())?;

    match &cli.command {
        Commands::Player(args) => commands::player::run(args, &client, &format).await?,
        Commands::History(args) => commands::history::run(args, &client, &format).await?,
        Commands::MapRotation(args) => commands::map_rotation::run(args, &client, &format).await?,
        Commands::Predators => {
            let resp = client.get_predators().await.map_err(redact_url)?;
            print_value(&resp, &format);
        }
        Commands::Store => {
            let resp = client.get_store().await.map_err(redact_url)?;
            print_value(&resp, &format);
        }
        Commands::News(args) => commands::news::run(args, &client, &format).await?,
        Commands::Servers => {
            commands::servers::run(&client, &format, &mut std::io::stderr()).await?
        }
        Commands::NameToUid(args) => commands::name_to_uid::run(args, &client, &format).await?,
    }

    Ok(())
}
