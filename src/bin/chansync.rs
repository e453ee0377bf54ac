use chansync::{
    ChannelSyncService, ChansyncConfig, ChansyncPaths, CommandTransfer, HttpIndexClient,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI arguments for one mirroring pass
#[derive(Parser, Debug)]
#[command(name = "chansync")]
#[command(about = "Mirror package artifacts between index channels")]
struct Args {
    /// Path to the config file (default: ~/.config/chansync/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plan the pass without downloading or uploading anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing with filtering
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,chansync=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting chansync at {}", chrono::Utc::now());

    let config_path = args.config.unwrap_or_else(ChansyncConfig::default_path);
    let config = ChansyncConfig::load(&config_path).await?;

    tracing::info!("  Index:       {}", config.index_url);
    tracing::info!("  Destination: {}", config.destination);
    tracing::info!("  Packages:    {}", config.packages.len());

    // Optional upload token; uploads fall back to unauthenticated when unset
    let token = std::env::var("CHANSYNC_TOKEN").ok();
    if token.is_none() {
        tracing::warn!("CHANSYNC_TOKEN not set, uploads will be unauthenticated");
    }

    let paths = ChansyncPaths::new(config.workdir.clone(), config.platforms.clone());
    paths.ensure_dirs().await?;

    let index = Arc::new(HttpIndexClient::with_base_url(&config.index_url));
    let transfer = Arc::new(CommandTransfer::new(
        &config.download_tool,
        &config.upload_tool,
    ));
    let service = ChannelSyncService::new(index, transfer, paths);

    let report = service
        .sync(
            &config.packages,
            &config.destination,
            token.as_deref(),
            args.dry_run,
        )
        .await;

    tracing::info!(
        "Done: {} mirrored, {} in sync, {} skipped, {} failed",
        report.mirrored,
        report.in_sync,
        report.skipped,
        report.failed,
    );

    Ok(())
}
