// パイプラインに関連するデータ型定義

use serde::Serialize;

/// キューを流れる値
///
/// 終了シグナルを専用のバリアントで表すため、正当な値と衝突しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<T> {
    /// 転送対象の値
    Item(T),
    /// これ以上値が来ないことを示す終了シグナル
    Done,
}

impl<T> Message<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Done => None,
        }
    }
}

/// キューの計測値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    /// 完了したput回数（終了シグナルを含む）
    pub puts: usize,
    /// 完了したget回数（終了シグナルを含む）
    pub gets: usize,
    /// 満杯で一度以上待機したput回数
    pub blocked_puts: usize,
    /// 空で一度以上待機したget回数
    pub blocked_gets: usize,
    /// 観測された最大長
    pub high_water_mark: usize,
}

/// 転送全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferSummary {
    pub items_sent: usize,
    pub items_received: usize,
    pub capacity: usize,
    pub queue_stats: QueueStats,
    pub total_time_ms: u64,
}

impl TransferSummary {
    /// Producerが一度でもバックプレッシャーで停止したか
    pub fn producer_blocked(&self) -> bool {
        self.queue_stats.blocked_puts > 0
    }
}

/// 転送結果と計測値
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome<T> {
    pub items: Vec<T>,
    pub summary: TransferSummary,
}
