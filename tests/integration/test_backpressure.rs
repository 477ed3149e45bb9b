// バックプレッシャーとキュー不変条件のテスト
use queue_pipeline::{
    services::{DefaultPipelineConfig, NoOpReporter},
    BoundedQueue, Message, TransferPipeline,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_slow_consumer_blocks_producer() {
    let config = DefaultPipelineConfig::default()
        .with_capacity(5)
        .with_consumer_delay(Duration::from_millis(3));
    let pipeline = TransferPipeline::new(config, NoOpReporter::new());

    let outcome = pipeline.execute(0..20).await.unwrap();

    assert_eq!(outcome.items, (0..20).collect::<Vec<_>>());
    assert!(outcome.summary.queue_stats.blocked_puts >= 1);
    assert!(outcome.summary.producer_blocked());
}

#[tokio::test]
async fn test_slow_producer_blocks_consumer() {
    let config = DefaultPipelineConfig::default()
        .with_capacity(5)
        .with_producer_delay(Duration::from_millis(3));
    let pipeline = TransferPipeline::new(config, NoOpReporter::new());

    let outcome = pipeline.execute(0..10).await.unwrap();

    assert_eq!(outcome.items, (0..10).collect::<Vec<_>>());
    assert!(outcome.summary.queue_stats.blocked_gets >= 1);
}

#[tokio::test]
async fn test_queue_length_never_exceeds_capacity() {
    for capacity in [1, 2, 5, 16] {
        let config = DefaultPipelineConfig::default()
            .with_capacity(capacity)
            .with_consumer_delay(Duration::from_micros(200));
        let pipeline = TransferPipeline::new(config, NoOpReporter::new());

        let outcome = pipeline.execute(0..64).await.unwrap();

        let stats = outcome.summary.queue_stats;
        assert!(stats.high_water_mark <= capacity, "capacity {capacity}");
        assert!(stats.high_water_mark >= 1);
        // 値と終了シグナルがそれぞれ1回ずつ出入りする
        assert_eq!(stats.puts, 65);
        assert_eq!(stats.gets, 65);
    }
}

#[tokio::test]
async fn test_stop_signal_arrives_after_every_item_with_capacity_one() {
    let config = DefaultPipelineConfig::default().with_capacity(1);
    let pipeline = TransferPipeline::new(config, NoOpReporter::new());

    let outcome = pipeline.execute(0..500).await.unwrap();

    assert_eq!(outcome.items.len(), 500);
    assert_eq!(outcome.items, (0..500).collect::<Vec<_>>());
    assert_eq!(outcome.summary.items_sent, outcome.summary.items_received);
}

#[test]
fn test_queue_with_plain_threads() {
    let queue = Arc::new(BoundedQueue::new(2).unwrap());

    let producer_queue = Arc::clone(&queue);
    let producer = std::thread::spawn(move || {
        for i in 0..100 {
            producer_queue.put(Message::Item(i));
        }
        producer_queue.put(Message::Done);
    });

    let mut received = Vec::new();
    loop {
        assert!(queue.len() <= queue.capacity());
        match queue.get() {
            Message::Item(i) => received.push(i),
            Message::Done => break,
        }
    }
    producer.join().unwrap();

    assert_eq!(received, (0..100).collect::<Vec<_>>());
    assert!(queue.is_empty());
}
