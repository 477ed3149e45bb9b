// キュー層 - スレッド間で値を受け渡す同期キュー

pub mod bounded;

// 公開API
pub use bounded::BoundedQueue;
