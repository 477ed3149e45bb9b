// 進捗監視の具象実装

use crate::core::{AnalysisReporter, PipelineReporter, TransferSummary};
use async_trait::async_trait;

/// コンソール出力による報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl PipelineReporter for ConsoleReporter {
    async fn report_started(&self, capacity: usize) {
        if !self.quiet {
            println!("🚀 Starting transfer (queue capacity: {capacity})...");
        }
    }

    async fn report_producer_finished(&self, items_sent: usize) {
        if !self.quiet {
            println!("📤 Producer finished: {items_sent} items sent");
        }
    }

    async fn report_completed(&self, summary: &TransferSummary) {
        if !self.quiet {
            println!(
                "✅ Completed! Received: {}, producer waits: {}, peak queue length: {}/{}",
                summary.items_received,
                summary.queue_stats.blocked_puts,
                summary.queue_stats.high_water_mark,
                summary.capacity
            );
        }
    }
}

#[async_trait]
impl AnalysisReporter for ConsoleReporter {
    async fn report_skipped_row(&self, line: u64, reason: &str) {
        if !self.quiet {
            eprintln!("⚠️  Skipping invalid row at line {line}: {reason}");
        }
    }

    async fn report_loaded(&self, source: &str, accepted: usize, skipped: usize) {
        if !self.quiet {
            println!("📄 Loaded {source}: {accepted} rows ({skipped} skipped)");
        }
    }
}

/// tracingのイベントとして報告する実装
#[derive(Debug, Default, Clone)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineReporter for TracingReporter {
    async fn report_started(&self, capacity: usize) {
        tracing::info!(capacity, "transfer started");
    }

    async fn report_producer_finished(&self, items_sent: usize) {
        tracing::info!(items_sent, "producer finished");
    }

    async fn report_completed(&self, summary: &TransferSummary) {
        tracing::info!(
            items_received = summary.items_received,
            blocked_puts = summary.queue_stats.blocked_puts,
            blocked_gets = summary.queue_stats.blocked_gets,
            high_water_mark = summary.queue_stats.high_water_mark,
            total_time_ms = summary.total_time_ms,
            "transfer completed"
        );
    }
}

#[async_trait]
impl AnalysisReporter for TracingReporter {
    async fn report_skipped_row(&self, line: u64, reason: &str) {
        tracing::warn!(line, reason, "skipping invalid row");
    }

    async fn report_loaded(&self, source: &str, accepted: usize, skipped: usize) {
        tracing::info!(source, accepted, skipped, "sales records loaded");
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineReporter for NoOpReporter {
    async fn report_started(&self, _capacity: usize) {
        // 何もしない
    }

    async fn report_producer_finished(&self, _items_sent: usize) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &TransferSummary) {
        // 何もしない
    }
}

#[async_trait]
impl AnalysisReporter for NoOpReporter {
    async fn report_skipped_row(&self, _line: u64, _reason: &str) {
        // 何もしない
    }

    async fn report_loaded(&self, _source: &str, _accepted: usize, _skipped: usize) {
        // 何もしない
    }
}
