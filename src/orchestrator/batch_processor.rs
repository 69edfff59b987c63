//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **扫描文件**：按扩展名找出所有结构文件，按路径排序
//! 2. **顺序处理**：逐个委托 `ProteinFlow` 处理，一次只有一个请求在进行
//! 3. **失败隔离**：单个文件失败只记录并跳过，不影响其余文件
//! 4. **限速**：两个文件之间固定等待，最后一个文件之后不等待

use crate::clients::PredictionApi;
use crate::config::Config;
use crate::infrastructure::Sleeper;
use crate::models::{scan_structure_files, ProteinResult};
use crate::services::{FailureLog, ResultParser};
use crate::utils::logging::{log_files_found, log_item_start};
use crate::workflow::{ProteinCtx, ProteinFlow};
use std::sync::Arc;
use tracing::{error, info, warn};

/// 单个文件的失败记录
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub file: String,
    pub kind: &'static str,
    pub reason: String,
}

/// 批处理结果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 成功的结果，保持文件顺序
    pub results: Vec<ProteinResult>,
    pub failures: Vec<FileFailure>,
    /// 扫描到的文件总数
    pub total: usize,
}

/// 批量处理器
pub struct BatchProcessor {
    config: Config,
    flow: ProteinFlow,
    sleeper: Arc<dyn Sleeper>,
    failure_log: Option<FailureLog>,
}

impl BatchProcessor {
    pub fn new(
        config: Config,
        api: Arc<dyn PredictionApi>,
        sleeper: Arc<dyn Sleeper>,
        parser: ResultParser,
    ) -> Self {
        let flow = ProteinFlow::new(api, sleeper.clone(), parser, &config);
        Self {
            config,
            flow,
            sleeper,
            failure_log: None,
        }
    }

    /// 失败的文件同时写入失败清单
    pub fn with_failure_log(mut self, failure_log: FailureLog) -> Self {
        self.failure_log = Some(failure_log);
        self
    }

    /// 处理文件夹中的所有结构文件
    pub async fn process_all(&self, input_folder: &str) -> BatchOutcome {
        self.process_all_with_log(input_folder, self.failure_log.as_ref())
            .await
    }

    /// 同 `process_all`，失败记录写入指定的清单（`None` 时不写）
    pub async fn process_all_with_log(
        &self,
        input_folder: &str,
        failure_log: Option<&FailureLog>,
    ) -> BatchOutcome {
        info!("\n📁 正在扫描待处理的结构文件...");

        let files = match scan_structure_files(input_folder, &self.config.file_extension).await {
            Ok(files) => files,
            Err(e) => {
                error!("❌ {:#}", e);
                return BatchOutcome::default();
            }
        };

        if files.is_empty() {
            warn!(
                "❌ 在 {} 中没有找到 .{} 文件",
                input_folder, self.config.file_extension
            );
            return BatchOutcome::default();
        }

        let total = files.len();
        log_files_found(total);

        let mut outcome = BatchOutcome {
            total,
            ..Default::default()
        };

        for (idx, path) in files.into_iter().enumerate() {
            let ctx = ProteinCtx::new(idx + 1, total, path);
            log_item_start(&ctx);

            match self.flow.run(&ctx).await {
                Ok(result) => {
                    info!("{} ✅ 完成", ctx);
                    outcome.results.push(result);
                }
                Err(e) => {
                    warn!("{} ⚠️ 处理失败，跳过: {}", ctx, e);
                    record_failure(failure_log, &ctx, e.kind(), &e.to_string());
                    outcome.failures.push(FileFailure {
                        file: ctx.file_name(),
                        kind: e.kind(),
                        reason: e.to_string(),
                    });
                }
            }

            if !ctx.is_last() {
                self.sleeper.sleep(self.config.inter_file_delay()).await;
            }
        }

        outcome
    }
}

fn record_failure(
    failure_log: Option<&FailureLog>,
    ctx: &ProteinCtx,
    kind: &str,
    reason: &str,
) {
    if let Some(log) = failure_log {
        let line = format!("[{}] {}", kind, reason);
        if let Err(e) = log.record(&ctx.file_name(), &line) {
            error!("{} 无法写入失败清单: {:#}", ctx, e);
        }
    }
}
