use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pulsedash_client::AnalyticsClient;
use pulsedash_core::store::DashboardStore;
use pulsedash_core::{run_analysis, run_refresh, DashboardConfig};

mod render;

#[derive(Debug, Parser)]
#[command(name = "pulsedash")]
#[command(about = "Social media analytics dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch all analytics and render the dashboard (default).
    Dashboard,
    /// Score a single text with the service sentiment classifier.
    Analyze {
        /// Text to analyze; must not be empty.
        #[arg(long)]
        text: String,
    },
    /// Ping the service liveness endpoint.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pulsedash_core::load_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let client = AnalyticsClient::with_base_url(config.request_timeout_secs, &config.api_url)?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze { text }) => analyze(&client, &text).await,
        Some(Commands::Health) => health(&client).await,
        Some(Commands::Dashboard) | None => dashboard(&client, &config).await,
    }

    Ok(())
}

/// One fetch cycle, then a full render of whatever phase it produced.
async fn dashboard(client: &AnalyticsClient, config: &DashboardConfig) {
    let store = Mutex::new(DashboardStore::new());
    run_refresh(client, &store).await;

    let store = store.into_inner().expect("dashboard store mutex poisoned");
    print!(
        "{}",
        render::render_dashboard(&store, config.engagement_window, config.trending_window)
    );
}

async fn analyze(client: &AnalyticsClient, text: &str) {
    let store = Mutex::new(DashboardStore::new());
    let accepted = run_analysis(client, &store, text).await;

    let store = store.into_inner().expect("dashboard store mutex poisoned");
    match store.analysis() {
        Some(result) => print!("{}", render::render_analysis(result)),
        None if accepted => println!("analysis failed; see logs"),
        None => println!("nothing to analyze: text must not be empty"),
    }
}

async fn health(client: &AnalyticsClient) {
    match client.health().await {
        Ok(status) => print!("{}", render::render_health(&status)),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            println!("service unreachable: {e}");
        }
    }
}
