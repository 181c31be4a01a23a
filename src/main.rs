use clap::Parser;
use intrasync::cli::Cli;
use intrasync::config::SyncConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intrasync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = SyncConfig::default();
    let range = cli.range(&config);
    let access_key = cli.resolve_access_key()?;

    tracing::info!(
        interval = %cli.interval,
        from = %range.date_from(),
        to = %range.date_to(),
        "Run started"
    );

    let summary = intrasync::sync::run(
        &config,
        cli.interval,
        range,
        &cli.symbols_file,
        &cli.database,
        access_key,
    )
    .await?;

    tracing::info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "Run finished"
    );

    // Individual symbol failures are reported above but do not fail the
    // process; a later run re-covers them idempotently.
    Ok(())
}
