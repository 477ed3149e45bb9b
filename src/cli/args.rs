use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "queue_pipeline")]
#[command(about = "Bounded producer/consumer transfer and sales record summaries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transfer the numbers 1..=COUNT through a bounded queue
    Transfer {
        /// Number of items to transfer
        #[arg(short = 'n', long, default_value = "10")]
        count: u64,

        /// Queue capacity
        #[arg(short, long, default_value = "5")]
        capacity: usize,

        /// Simulated work per item on the producer side (milliseconds)
        #[arg(long, default_value = "0")]
        producer_delay_ms: u64,

        /// Simulated work per item on the consumer side (milliseconds)
        #[arg(long, default_value = "0")]
        consumer_delay_ms: u64,
    },

    /// Summarize a sales record file
    Analyze {
        /// CSV file with columns id, region, item, units, price
        csv_file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run two sample transfers followed by a sales summary
    Demo {
        /// Sales record file used for the summary part (defaults to the bundled data/sales_data.csv)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}
