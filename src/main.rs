use anyhow::Result;
use clap::Parser;
use queue_pipeline::cli::{
    execute_analyze, execute_demo, execute_transfer, Cli, Commands, TransferConfig,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "queue_pipeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transfer {
            count,
            capacity,
            producer_delay_ms,
            consumer_delay_ms,
        } => {
            execute_transfer(TransferConfig {
                count,
                capacity,
                producer_delay: Duration::from_millis(producer_delay_ms),
                consumer_delay: Duration::from_millis(consumer_delay_ms),
            })
            .await
        }
        Commands::Analyze { csv_file, json } => execute_analyze(csv_file, json).await,
        Commands::Demo { data } => execute_demo(data).await,
    }
}
