// エンジン層 - Producer/Consumerの起動とオーケストレーション
// キュー層とサービス層を組み合わせて転送処理を提供

pub mod api;
pub mod consumer;
pub mod pipeline;
pub mod producer;

// 公開API
pub use api::{create_quiet_pipeline, transfer, transfer_with_capacity, transfer_with_reporter};
pub use consumer::{spawn_consumer, ConsumerState};
pub use pipeline::TransferPipeline;
pub use producer::spawn_producer;
