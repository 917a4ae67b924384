mod commands;
mod progress;
mod render;
mod views;

use clap::{Parser, Subcommand};
use nplace_client::NplaceClient;
use nplace_core::KeywordFlag;
use tracing_subscriber::EnvFilter;

use commands::{DashboardCommands, HistoryArgs, KeywordCommands, StoreCommands};

#[derive(Debug, Parser)]
#[command(name = "nplace")]
#[command(about = "Naver Place rank tracking dashboard")]
struct Cli {
    /// Backend base URL (overrides `NPLACE_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show every store with its keyword ranks
    Dashboard {
        #[command(subcommand)]
        command: Option<DashboardCommands>,
    },
    /// Register, inspect and delete stores
    Stores {
        #[command(subcommand)]
        command: StoreCommands,
    },
    /// Manage tracked keywords
    Keywords {
        #[command(subcommand)]
        command: KeywordCommands,
    },
    /// Show the ranking history of a keyword
    History(HistoryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = nplace_core::load_app_config()?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = NplaceClient::from_config(&config)?;
    tracing::debug!(base_url = %client.base_url(), env = %config.env, "client ready");
    let concurrency = config.collect_concurrency;

    match cli.command {
        None | Some(Commands::Dashboard { command: None }) => {
            commands::run_dashboard(&client, concurrency).await?;
        }
        Some(Commands::Dashboard {
            command: Some(DashboardCommands::CollectAll { store }),
        }) => commands::run_collect_all(&client, store, concurrency).await?,
        Some(Commands::Stores { command }) => match command {
            StoreCommands::List => commands::run_stores_list(&client).await?,
            StoreCommands::Register { place_id } => {
                commands::run_stores_register(&client, &place_id).await?;
            }
            StoreCommands::Delete { id } => commands::run_stores_delete(&client, id).await?,
            StoreCommands::Show { id } => commands::run_stores_show(&client, id).await?,
            StoreCommands::Summary { id } => commands::run_stores_summary(&client, id).await?,
        },
        Some(Commands::Keywords { command }) => match command {
            KeywordCommands::List { store } => commands::run_keywords_list(&client, store).await?,
            KeywordCommands::Add {
                store,
                keyword,
                time,
                alert,
            } => commands::run_keywords_add(&client, store, &keyword, time, alert).await?,
            KeywordCommands::Toggle { id, active, .. } => {
                let flag = if active {
                    KeywordFlag::Active
                } else {
                    KeywordFlag::Alert
                };
                commands::run_keywords_toggle(&client, id, flag).await?;
            }
            KeywordCommands::Delete { id } => commands::run_keywords_delete(&client, id).await?,
            KeywordCommands::Collect { id } => commands::run_keywords_collect(&client, id).await?,
        },
        Some(Commands::History(args)) => commands::run_history(&client, &args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
