// 集計層 - 売上レコードの逐次集計
//
// 転送パイプラインとは独立した、一括読み込み・一括集計の処理。
// 不正な行の警告はAnalysisReporter経由で呼び出し側に渡す。

pub mod record;
pub mod report;
pub mod sales;

// 公開API
pub use record::{load_records, parse_records, LoadedRecords, SalesRecord};
pub use report::AnalysisReport;
pub use sales::SalesAnalysis;
