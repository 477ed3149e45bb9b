// Consumer - キューから受信先の列へ取り出す

use crate::{core::Message, queue::BoundedQueue};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Consumerの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    Running,
    Stopped,
}

/// Consumer: 終了シグナルを受け取るまでキューから取り出す
///
/// 受信先の列はこのスレッドだけが所有し、終了時にJoinHandle経由で返す。
pub fn spawn_consumer<T>(queue: Arc<BoundedQueue<T>>, delay: Duration) -> JoinHandle<Vec<T>>
where
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut destination = Vec::new();
        let mut state = ConsumerState::Running;

        while state == ConsumerState::Running {
            match queue.get() {
                Message::Item(item) => {
                    destination.push(item);
                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                }
                Message::Done => state = ConsumerState::Stopped,
            }
        }

        tracing::debug!(received = destination.len(), "consumer stopped");
        destination
    })
}
