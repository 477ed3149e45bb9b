// 高レベル公開API
// TransferPipelineを簡単に使用できるようにするための便利な関数

use super::TransferPipeline;
use crate::{
    core::{PipelineConfig, PipelineReporter, PipelineResult, TransferOutcome},
    services::{DefaultPipelineConfig, NoOpReporter},
};

/// デフォルト設定（容量5）で転送し、受信した列を返す
pub async fn transfer<I>(source: I) -> PipelineResult<Vec<I::Item>>
where
    I: IntoIterator + Send + 'static,
    I::Item: Send + 'static,
{
    transfer_with_capacity(source, DefaultPipelineConfig::DEFAULT_CAPACITY).await
}

/// 容量を指定して転送
pub async fn transfer_with_capacity<I>(source: I, capacity: usize) -> PipelineResult<Vec<I::Item>>
where
    I: IntoIterator + Send + 'static,
    I::Item: Send + 'static,
{
    let pipeline = create_quiet_pipeline(capacity);
    let outcome = pipeline.execute(source).await?;
    Ok(outcome.items)
}

/// 任意の設定とレポーターで転送し、サマリーも返す
pub async fn transfer_with_reporter<I, C, R>(
    source: I,
    config: C,
    reporter: R,
) -> PipelineResult<TransferOutcome<I::Item>>
where
    I: IntoIterator + Send + 'static,
    I::Item: Send + 'static,
    C: PipelineConfig,
    R: PipelineReporter + 'static,
{
    TransferPipeline::new(config, reporter).execute(source).await
}

/// 静音パイプライン作成のヘルパー関数
pub fn create_quiet_pipeline(capacity: usize) -> TransferPipeline<DefaultPipelineConfig, NoOpReporter> {
    TransferPipeline::new(
        DefaultPipelineConfig::default()
            .with_capacity(capacity)
            .with_progress_reporting(false),
        NoOpReporter::new(),
    )
}
