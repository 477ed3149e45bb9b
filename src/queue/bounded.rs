// 容量制限付きブロッキングキュー
//
// Mutex + 2つのCondvar（not_full / not_empty）によるモニタ実装。
// 条件の確認と変更は同一のクリティカルセクション内で行い、
// 起床後は必ず条件を再確認する。

use crate::core::{Message, QueueStats, ValidationError, ValidationResult};
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

struct QueueState<T> {
    buffer: VecDeque<Message<T>>,
    stats: QueueStats,
}

/// 単一Producer・単一Consumer間で値を受け渡す容量制限付きキュー
pub struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// 指定容量のキューを作成（容量0は不可）
    pub fn new(capacity: usize) -> ValidationResult<Self> {
        if capacity == 0 {
            return Err(ValidationError::new(
                "capacity",
                "キュー容量は1以上である必要があります",
            ));
        }

        Ok(Self {
            state: Mutex::new(QueueState {
                buffer: VecDeque::with_capacity(capacity),
                stats: QueueStats::default(),
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    // 各クリティカルセクションはバッファを整合した状態で抜けるため、
    // 他スレッドのパニックで汚染されていても中身はそのまま使える
    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 末尾に追加する。満杯の間はロックを解放して待機する。
    pub fn put(&self, message: Message<T>) {
        let mut state = self.lock();

        if state.buffer.len() >= self.capacity {
            state.stats.blocked_puts += 1;
            while state.buffer.len() >= self.capacity {
                state = self
                    .not_full
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
            }
        }

        state.buffer.push_back(message);
        state.stats.puts += 1;
        let len = state.buffer.len();
        state.stats.high_water_mark = state.stats.high_water_mark.max(len);
        drop(state);

        self.not_empty.notify_all();
    }

    /// 先頭を取り出す。空の間はロックを解放して待機する。
    pub fn get(&self) -> Message<T> {
        let mut state = self.lock();
        let mut waited = false;

        let message = loop {
            if let Some(message) = state.buffer.pop_front() {
                break message;
            }
            if !waited {
                state.stats.blocked_gets += 1;
                waited = true;
            }
            state = self
                .not_empty
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        };

        state.stats.gets += 1;
        drop(state);

        self.not_full.notify_all();
        message
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lock().buffer.len() >= self.capacity
    }

    /// 計測値のスナップショット
    pub fn stats(&self) -> QueueStats {
        self.lock().stats
    }
}

impl<T> std::fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("len", &state.buffer.len())
            .field("stats", &state.stats)
            .finish()
    }
}
