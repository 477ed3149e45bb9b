//! 容量制限付きキューによる単一Producer・単一Consumer転送と、
//! 売上レコードの集計ユーティリティ。
//!
//! ```no_run
//! # async fn run() -> queue_pipeline::core::PipelineResult<()> {
//! let received = queue_pipeline::transfer(vec![1, 2, 3]).await?;
//! assert_eq!(received, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod core;
pub mod engine;
pub mod queue;
pub mod services;

pub use analysis::{AnalysisReport, SalesAnalysis, SalesRecord};
pub use crate::core::{Message, PipelineError, PipelineResult, TransferOutcome, TransferSummary};
pub use engine::{transfer, transfer_with_capacity, transfer_with_reporter, TransferPipeline};
pub use queue::BoundedQueue;
