//! 等待能力 - 基础设施层
//!
//! 轮询间隔和文件间隔都通过这里等待，测试中替换为不真正睡眠的实现

use async_trait::async_trait;
use std::time::Duration;

/// 等待能力
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// 基于 tokio 定时器的实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
