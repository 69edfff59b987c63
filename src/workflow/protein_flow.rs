//! 蛋白处理流程 - 流程层
//!
//! 核心职责：定义"一个结构文件"的完整处理流程
//!
//! 流程顺序：
//! 1. 上传结构文件 → 任务 ID
//! 2. 轮询任务状态 → 完成 / 失败 / 超时
//! 3. 解析预测结果 → ProteinResult

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::clients::PredictionApi;
use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::infrastructure::Sleeper;
use crate::models::ProteinResult;
use crate::services::{JobPoller, PollState, ResultParser};
use crate::workflow::protein_ctx::ProteinCtx;

/// 单个结构文件的处理流程
///
/// - 决定何时上传、何时轮询、何时解析
/// - 任何一步失败都返回对应的错误，由编排层决定跳过
pub struct ProteinFlow {
    api: Arc<dyn PredictionApi>,
    poller: JobPoller,
    parser: ResultParser,
    max_wait: Duration,
}

impl ProteinFlow {
    pub fn new(
        api: Arc<dyn PredictionApi>,
        sleeper: Arc<dyn Sleeper>,
        parser: ResultParser,
        config: &Config,
    ) -> Self {
        let poller = JobPoller::new(api.clone(), sleeper, config.poll_interval());
        Self {
            api,
            poller,
            parser,
            max_wait: config.max_wait(),
        }
    }

    pub async fn run(&self, ctx: &ProteinCtx) -> PipelineResult<ProteinResult> {
        // ========== 1. 上传 ==========
        info!("{} 📤 正在上传...", ctx);
        let job_id = self
            .api
            .upload(&ctx.path)
            .await
            .map_err(|e| PipelineError::upload(ctx.file_name(), e))?;
        info!("{} ✓ 上传成功 (任务ID: {})", ctx, job_id);

        // ========== 2. 轮询 ==========
        info!("{} ⏳ 等待预测结果...", ctx);
        let outcome = self.poller.poll(&job_id, self.max_wait).await;
        let attempts = outcome.attempts;
        let response = match outcome.state {
            PollState::Complete(response) => response,
            PollState::Failed => {
                return Err(PipelineError::PollFailure {
                    job_id: job_id.to_string(),
                })
            }
            PollState::TimedOut => {
                return Err(PipelineError::PollTimeout {
                    job_id: job_id.to_string(),
                    waited_secs: outcome.elapsed.as_secs(),
                })
            }
        };
        info!("{} ✓ 任务完成 (查询 {} 次)", ctx, attempts);

        // ========== 3. 解析 ==========
        let result = self.parser.parse(&ctx.protein_id, &response);
        for category in crate::models::Category::ALL {
            let cat = result.category(category);
            if cat.used_fallback {
                info!("{} ⚠️ {} 使用基于序列的预测", ctx, category);
            }
        }

        Ok(result)
    }
}
