// パイプラインと集計処理のトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::TransferSummary;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// キューの容量を取得
    fn queue_capacity(&self) -> usize;

    /// Producerが1件送るごとの待機時間
    fn producer_delay(&self) -> Duration;

    /// Consumerが1件受け取るごとの待機時間
    fn consumer_delay(&self) -> Duration;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn queue_capacity(&self) -> usize {
        self.as_ref().queue_capacity()
    }

    fn producer_delay(&self) -> Duration {
        self.as_ref().producer_delay()
    }

    fn consumer_delay(&self) -> Duration {
        self.as_ref().consumer_delay()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// パイプラインの進捗報告トレイト
#[automock]
#[async_trait]
pub trait PipelineReporter: Send + Sync {
    /// 転送開始時の報告
    async fn report_started(&self, capacity: usize);

    /// Producerが全件送り終えた時の報告
    async fn report_producer_finished(&self, items_sent: usize);

    /// 転送完了時の報告
    async fn report_completed(&self, summary: &TransferSummary);
}

/// 集計処理の報告トレイト
#[automock]
#[async_trait]
pub trait AnalysisReporter: Send + Sync {
    /// 不正な行を読み飛ばした時の報告
    async fn report_skipped_row(&self, line: u64, reason: &str);

    /// 読み込み完了時の報告
    async fn report_loaded(&self, source: &str, accepted: usize, skipped: usize);
}
