// 設定管理機能
// キュー容量と擬似的な処理時間の設定

pub mod implementations;

// 公開API
pub use implementations::DefaultPipelineConfig;
