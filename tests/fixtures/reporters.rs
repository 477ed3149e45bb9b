// 呼び出しを記録するレポーター

use async_trait::async_trait;
use queue_pipeline::core::{AnalysisReporter, PipelineReporter, TransferSummary};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecordingReporter {
    pub started: Arc<Mutex<Vec<usize>>>,
    pub completed: Arc<Mutex<Vec<TransferSummary>>>,
    pub skipped_rows: Arc<Mutex<Vec<(u64, String)>>>,
    pub loaded: Arc<Mutex<Option<(String, usize, usize)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skipped_lines(&self) -> Vec<u64> {
        self.skipped_rows
            .lock()
            .unwrap()
            .iter()
            .map(|(line, _)| *line)
            .collect()
    }
}

#[async_trait]
impl PipelineReporter for RecordingReporter {
    async fn report_started(&self, capacity: usize) {
        self.started.lock().unwrap().push(capacity);
    }

    async fn report_producer_finished(&self, _items_sent: usize) {}

    async fn report_completed(&self, summary: &TransferSummary) {
        self.completed.lock().unwrap().push(summary.clone());
    }
}

#[async_trait]
impl AnalysisReporter for RecordingReporter {
    async fn report_skipped_row(&self, line: u64, reason: &str) {
        self.skipped_rows
            .lock()
            .unwrap()
            .push((line, reason.to_string()));
    }

    async fn report_loaded(&self, source: &str, accepted: usize, skipped: usize) {
        *self.loaded.lock().unwrap() = Some((source.to_string(), accepted, skipped));
    }
}
