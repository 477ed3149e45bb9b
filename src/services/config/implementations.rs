// 設定管理の具象実装

use crate::core::{PipelineConfig, ValidationError, ValidationResult};
use std::time::Duration;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    capacity: usize,
    producer_delay: Duration,
    consumer_delay: Duration,
    enable_progress: bool,
}

impl DefaultPipelineConfig {
    /// 一般的な転送量より小さくしてバックプレッシャーが発生する容量
    pub const DEFAULT_CAPACITY: usize = 5;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_producer_delay(mut self, delay: Duration) -> Self {
        self.producer_delay = delay;
        self
    }

    pub fn with_consumer_delay(mut self, delay: Duration) -> Self {
        self.consumer_delay = delay;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> ValidationResult<()> {
        if self.capacity == 0 {
            return Err(ValidationError::new(
                "capacity",
                "キュー容量は1以上である必要があります",
            ));
        }
        Ok(())
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            producer_delay: Duration::ZERO,
            consumer_delay: Duration::ZERO,
            enable_progress: true,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn queue_capacity(&self) -> usize {
        self.capacity
    }

    fn producer_delay(&self) -> Duration {
        self.producer_delay
    }

    fn consumer_delay(&self) -> Duration {
        self.consumer_delay
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
