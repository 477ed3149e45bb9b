use super::{
    analyze::execute_analyze,
    transfer::{execute_transfer, TransferConfig},
};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Sales file shipped with the crate, resolved from the manifest directory
pub fn bundled_sales_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sales_data.csv")
}

/// Run a small and a larger transfer, then summarize the sales file
pub async fn execute_demo(data: Option<PathBuf>) -> Result<()> {
    let data = data.unwrap_or_else(bundled_sales_data);

    println!("{}", "=".repeat(60));
    println!("Producer-Consumer transfer");
    println!("{}", "=".repeat(60));

    println!("\nSmall dataset (10 items, 10ms of simulated work per side)");
    execute_transfer(TransferConfig {
        count: 10,
        capacity: 5,
        producer_delay: Duration::from_millis(10),
        consumer_delay: Duration::from_millis(10),
    })
    .await?;

    println!("\nLarge dataset (50 items)");
    execute_transfer(TransferConfig {
        count: 50,
        capacity: 5,
        producer_delay: Duration::ZERO,
        consumer_delay: Duration::ZERO,
    })
    .await?;

    println!("\n{}", "=".repeat(60));
    println!("Sales data summary");
    println!("{}", "=".repeat(60));
    execute_analyze(data, false).await?;

    Ok(())
}
