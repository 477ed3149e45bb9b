// Producer - ソース列をキューへ配信

use crate::{core::Message, queue::BoundedQueue};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Producer: ソースの値を順番にキューへ送る
///
/// ブロッキングスレッド上で動作し、送信件数を返す。
/// 終了シグナルはオーケストレーター側が送るため、ここでは送らない。
pub fn spawn_producer<I>(
    source: I,
    queue: Arc<BoundedQueue<I::Item>>,
    delay: Duration,
) -> JoinHandle<usize>
where
    I: IntoIterator + Send + 'static,
    I::Item: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut sent = 0;
        for item in source {
            queue.put(Message::Item(item));
            sent += 1;
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
        tracing::debug!(sent, "producer finished");
        sent
    })
}
