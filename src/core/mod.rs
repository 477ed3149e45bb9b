// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{
    AnalysisError, AnalysisResult, PipelineError, PipelineResult, ValidationError,
    ValidationResult,
};
pub use traits::{AnalysisReporter, PipelineConfig, PipelineReporter};
pub use types::{Message, QueueStats, TransferOutcome, TransferSummary};
