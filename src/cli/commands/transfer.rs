use crate::{
    core::TransferOutcome,
    engine::TransferPipeline,
    services::{DefaultPipelineConfig, TracingReporter},
};
use anyhow::Result;
use std::time::Duration;

/// Options for the transfer command
#[derive(Debug, Clone)]
pub struct TransferConfig {
    pub count: u64,
    pub capacity: usize,
    pub producer_delay: Duration,
    pub consumer_delay: Duration,
}

/// Transfer 1..=count through the pipeline and return the outcome
pub async fn run_transfer(config: &TransferConfig) -> Result<TransferOutcome<u64>> {
    let pipeline_config = DefaultPipelineConfig::new(config.capacity)
        .with_producer_delay(config.producer_delay)
        .with_consumer_delay(config.consumer_delay);
    pipeline_config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid transfer options: {e}"))?;

    let pipeline = TransferPipeline::new(pipeline_config, TracingReporter::new());
    let outcome = pipeline.execute(1..=config.count).await?;
    Ok(outcome)
}

/// Execute the transfer command
pub async fn execute_transfer(config: TransferConfig) -> Result<()> {
    let outcome = run_transfer(&config).await?;
    let summary = &outcome.summary;

    println!("Source: 1..={}", config.count);
    println!("Result: {}", preview(&outcome.items));
    println!(
        "Success: {}",
        outcome.items.iter().copied().eq(1..=config.count)
    );
    println!(
        "Queue: capacity {}, peak length {}, producer waits {}, consumer waits {}",
        summary.capacity,
        summary.queue_stats.high_water_mark,
        summary.queue_stats.blocked_puts,
        summary.queue_stats.blocked_gets
    );
    println!("Elapsed: {}ms", summary.total_time_ms);

    Ok(())
}

/// Short rendering of a long sequence: first two and last two values
pub fn preview(items: &[u64]) -> String {
    if items.len() <= 10 {
        return format!("{items:?}");
    }
    format!(
        "[{}, {}, ..., {}, {}]",
        items[0],
        items[1],
        items[items.len() - 2],
        items[items.len() - 1]
    )
}
