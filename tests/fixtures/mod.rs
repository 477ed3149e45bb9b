// テストユーティリティ
// 統合テスト用のレポーター実装とテストデータ

pub mod reporters;

// 公開API
pub use reporters::*;
pub use test_data::*;
