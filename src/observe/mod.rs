//! 计算过程观察接口
//!
//! 引擎本身没有副作用：中间结果通过调用方注入的 [`MetricsObserver`] 报告，
//! 由调用方决定是丢弃、写入 tracing 日志还是收集到内存里。

mod events;

pub use events::{EventLog, MetricsEvent, MetricsObserver, NoopObserver, TracingObserver};
