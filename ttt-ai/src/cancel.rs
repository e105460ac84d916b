//! 取消与时间预算
//!
//! 搜索是协作式取消的：调用方升起 [`StopFlag`]，或 [`Deadline`] 到期，
//! 搜索在下一个检查点放弃当前深度。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 共享的停止标志
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知搜索尽快停止
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// 按挂钟时间计算的截止时间
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    /// 从现在开始计时
    pub fn after(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// 内部预算取 `min(nominal, sqrt(nominal 秒数))`，为外部硬超时留出余量
    pub fn scaled(nominal: Duration) -> Duration {
        let root = Duration::from_secs_f64(nominal.as_secs_f64().sqrt());
        nominal.min(root)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// 已用时间
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.budget
    }
}
