// Pipeline - Producer-Consumer パイプライン
// キュー作成からProducer/Consumerの起動、終了シグナル送信までのオーケストレーション

use super::{consumer::spawn_consumer, producer::spawn_producer};
use crate::{
    core::{
        Message, PipelineConfig, PipelineReporter, PipelineResult, TransferOutcome,
        TransferSummary,
    },
    queue::BoundedQueue,
};
use std::sync::Arc;
use std::time::Instant;

/// 設定とレポーターを注入された転送パイプライン
pub struct TransferPipeline<C, R> {
    config: C,
    reporter: Arc<R>,
}

impl<C, R> TransferPipeline<C, R>
where
    C: PipelineConfig,
    R: PipelineReporter + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(config: C, reporter: R) -> Self {
        Self {
            config,
            reporter: Arc::new(reporter),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// ソース列を転送し、同じ順序の列を返す
    ///
    /// 実行ごとに新しいキューを作成する。終了シグナルはProducer完了後に
    /// ちょうど1つだけ送るため、Consumerは全ての値を受け取った後に停止する。
    pub async fn execute<I>(&self, source: I) -> PipelineResult<TransferOutcome<I::Item>>
    where
        I: IntoIterator + Send + 'static,
        I::Item: Send + 'static,
    {
        let start_time = Instant::now();
        let capacity = self.config.queue_capacity();
        let queue = Arc::new(BoundedQueue::new(capacity)?);
        let reporting = self.config.enable_progress_reporting();

        if reporting {
            self.reporter.report_started(capacity).await;
        }

        // Producer / Consumer起動
        let producer_handle =
            spawn_producer(source, Arc::clone(&queue), self.config.producer_delay());
        let consumer_handle = spawn_consumer(Arc::clone(&queue), self.config.consumer_delay());
        tracing::debug!(capacity, "producer and consumer spawned");

        // Producer完了を待機（Consumerはまだ動作中の場合がある）
        let producer_result = producer_handle.await;
        match &producer_result {
            Ok(items_sent) if reporting => {
                self.reporter.report_producer_finished(*items_sent).await;
            }
            Ok(_) => {}
            Err(error) => {
                tracing::error!(%error, "producer failed before exhausting its source");
            }
        }

        // Producerが失敗してもConsumerは必ず停止させる
        let signal_queue = Arc::clone(&queue);
        let signal_result =
            tokio::task::spawn_blocking(move || signal_queue.put(Message::Done)).await;

        // Consumer完了を待機
        let consumer_result = consumer_handle.await;

        let items_sent = producer_result?;
        signal_result?;
        let items = consumer_result?;

        let summary = TransferSummary {
            items_sent,
            items_received: items.len(),
            capacity,
            queue_stats: queue.stats(),
            total_time_ms: start_time.elapsed().as_millis() as u64,
        };

        if reporting {
            self.reporter.report_completed(&summary).await;
        }

        Ok(TransferOutcome { items, summary })
    }
}
