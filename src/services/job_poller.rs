//! 任务轮询服务 - 业务能力层
//!
//! 只负责"等一个任务结束"，不关心文件和结果解析

use crate::clients::{JobId, PredictionApi};
use crate::infrastructure::Sleeper;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const STATUS_COMPLETE: &str = "complete";
const STATUS_FAILED: &str = "failed";

/// 轮询的终止状态
#[derive(Debug, Clone, PartialEq)]
pub enum PollState {
    /// 任务完成，附带完整响应
    Complete(Value),
    /// 服务端报告任务失败
    Failed,
    /// 等待超时
    TimedOut,
}

/// 轮询结果（附带尝试次数和累计等待时间）
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome {
    pub state: PollState,
    pub attempts: u32,
    pub elapsed: Duration,
}

impl PollOutcome {
    /// 只有完成时才返回响应
    pub fn into_response(self) -> Option<Value> {
        match self.state {
            PollState::Complete(response) => Some(response),
            PollState::Failed | PollState::TimedOut => None,
        }
    }
}

/// 任务轮询器
///
/// 查询状态 → 完成/失败立即返回 → 其他情况等待固定间隔后重试，
/// 直到累计等待时间达到上限。查询出错视为暂时性错误，继续轮询。
pub struct JobPoller {
    api: Arc<dyn PredictionApi>,
    sleeper: Arc<dyn Sleeper>,
    interval: Duration,
}

impl JobPoller {
    /// 创建轮询器，间隔为 0 时按 1 秒处理
    pub fn new(api: Arc<dyn PredictionApi>, sleeper: Arc<dyn Sleeper>, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            Duration::from_secs(1)
        } else {
            interval
        };

        Self {
            api,
            sleeper,
            interval,
        }
    }

    pub async fn poll(&self, job_id: &JobId, max_wait: Duration) -> PollOutcome {
        let mut elapsed = Duration::ZERO;
        let mut attempts = 0;

        while elapsed < max_wait {
            attempts += 1;

            match self.api.fetch_status(job_id).await {
                Ok(response) => match status_of(&response).map(str::to_owned).as_deref() {
                    Some(STATUS_COMPLETE) => {
                        debug!("任务 {} 完成 (第 {} 次查询)", job_id, attempts);
                        return PollOutcome {
                            state: PollState::Complete(response),
                            attempts,
                            elapsed,
                        };
                    }
                    Some(STATUS_FAILED) => {
                        warn!("任务 {} 被服务端标记为失败", job_id);
                        return PollOutcome {
                            state: PollState::Failed,
                            attempts,
                            elapsed,
                        };
                    }
                    other => {
                        debug!("任务 {} 状态: {:?} ({}s)", job_id, other, elapsed.as_secs());
                    }
                },
                Err(e) => {
                    warn!("查询任务 {} 状态出错: {}", job_id, e);
                }
            }

            self.sleeper.sleep(self.interval).await;
            elapsed += self.interval;
        }

        warn!("任务 {} 超时 (已等待 {}s)", job_id, max_wait.as_secs());
        PollOutcome {
            state: PollState::TimedOut,
            attempts,
            elapsed,
        }
    }
}

fn status_of(response: &Value) -> Option<&str> {
    response.get("status").and_then(|v| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PipelineError, PipelineResult};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::path::Path;
    use std::sync::Mutex;

    /// 按顺序返回预设的状态响应，`None` 表示请求出错
    struct ScriptedApi {
        responses: Mutex<VecDeque<Option<Value>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<Option<Value>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl PredictionApi for ScriptedApi {
        async fn upload(&self, _path: &Path) -> PipelineResult<JobId> {
            unreachable!("poller never uploads")
        }

        async fn fetch_status(&self, _job_id: &JobId) -> PipelineResult<Value> {
            *self.calls.lock().unwrap() += 1;
            match self.responses.lock().unwrap().pop_front() {
                Some(Some(response)) => Ok(response),
                Some(None) => Err(PipelineError::BadStatus {
                    endpoint: "/api/status/j".to_string(),
                    status: 503,
                }),
                None => Ok(json!({"status": "running"})),
            }
        }
    }

    #[derive(Default)]
    struct RecordingSleeper {
        slept: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    fn poller(api: Arc<ScriptedApi>, sleeper: Arc<RecordingSleeper>) -> JobPoller {
        JobPoller::new(api, sleeper, Duration::from_secs(5))
    }

    fn job() -> JobId {
        JobId("j".to_string())
    }

    #[tokio::test]
    async fn test_complete_returns_response() {
        let api = Arc::new(ScriptedApi::new(vec![
            Some(json!({"status": "queued"})),
            Some(json!({"status": "complete", "structure_mf": []})),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let outcome = poller(api.clone(), sleeper.clone())
            .poll(&job(), Duration::from_secs(300))
            .await;

        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.elapsed, Duration::from_secs(5));
        let response = outcome.into_response().unwrap();
        assert_eq!(response["status"], "complete");
        assert_eq!(sleeper.slept.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_stops_immediately() {
        let api = Arc::new(ScriptedApi::new(vec![Some(json!({"status": "failed"}))]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let outcome = poller(api.clone(), sleeper.clone())
            .poll(&job(), Duration::from_secs(300))
            .await;

        assert_eq!(outcome.state, PollState::Failed);
        assert_eq!(api.calls(), 1);
        assert!(sleeper.slept.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_after_two_attempts() {
        let api = Arc::new(ScriptedApi::new(vec![]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let outcome = poller(api.clone(), sleeper.clone())
            .poll(&job(), Duration::from_secs(10))
            .await;

        assert_eq!(outcome.state, PollState::TimedOut);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(api.calls(), 2);
        assert_eq!(outcome.elapsed, Duration::from_secs(10));
        assert_eq!(
            *sleeper.slept.lock().unwrap(),
            vec![Duration::from_secs(5), Duration::from_secs(5)]
        );
        assert!(outcome.into_response().is_none());
    }

    #[tokio::test]
    async fn test_transport_errors_keep_polling() {
        let api = Arc::new(ScriptedApi::new(vec![
            None,
            None,
            Some(json!({"status": "complete"})),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let outcome = poller(api.clone(), sleeper)
            .poll(&job(), Duration::from_secs(300))
            .await;

        assert_eq!(outcome.attempts, 3);
        assert!(matches!(outcome.state, PollState::Complete(_)));
    }

    #[tokio::test]
    async fn test_missing_status_field_is_not_terminal() {
        let api = Arc::new(ScriptedApi::new(vec![
            Some(json!({"structure_mf": []})),
            Some(json!({"status": 1})),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let outcome = poller(api, sleeper)
            .poll(&job(), Duration::from_secs(15))
            .await;

        assert_eq!(outcome.state, PollState::TimedOut);
        assert_eq!(outcome.attempts, 3);
    }

    #[tokio::test]
    async fn test_zero_max_wait_never_queries() {
        let api = Arc::new(ScriptedApi::new(vec![Some(json!({"status": "complete"}))]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let outcome = poller(api.clone(), sleeper)
            .poll(&job(), Duration::ZERO)
            .await;

        assert_eq!(outcome.state, PollState::TimedOut);
        assert_eq!(api.calls(), 0);
    }
}
