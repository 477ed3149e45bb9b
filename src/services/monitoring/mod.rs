// 進捗監視機能
// 転送の開始・完了通知と、集計時の不正行の警告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter, TracingReporter};
