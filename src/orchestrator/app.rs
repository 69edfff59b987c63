//! 应用入口 - 编排层
//!
//! 持有配置、客户端和等待能力，按顺序执行：
//! 扫描并处理 → 写 Excel → 输出统计

use crate::clients::{DeepFriClient, PredictionApi};
use crate::config::Config;
use crate::infrastructure::{Sleeper, TokioSleeper};
use crate::models::{load_alias_table, AliasTable, BatchStatistics};
use crate::orchestrator::batch_processor::{BatchOutcome, BatchProcessor};
use crate::services::{write_report, FailureLog, ResultParser};
use crate::utils::logging::{log_startup, print_final_stats};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, warn};

/// 应用主结构
pub struct App {
    config: Config,
    processor: BatchProcessor,
    failure_log: FailureLog,
}

impl App {
    /// 初始化应用（真实 HTTP 客户端）
    pub async fn initialize(config: Config) -> Result<Self> {
        let aliases = match &config.alias_file {
            Some(path) => load_alias_table(Path::new(path)).await?,
            None => AliasTable::default(),
        };

        let api: Arc<dyn PredictionApi> = Arc::new(DeepFriClient::new(&config)?);
        let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);

        Ok(Self::from_parts(config, api, sleeper, aliases))
    }

    /// 使用指定的客户端和等待实现组装应用
    pub fn from_parts(
        config: Config,
        api: Arc<dyn PredictionApi>,
        sleeper: Arc<dyn Sleeper>,
        aliases: AliasTable,
    ) -> Self {
        let failure_log = FailureLog::new(config.failure_log_file.clone());
        let parser = ResultParser::new(aliases, config.max_predictions);
        let processor = BatchProcessor::new(config.clone(), api, sleeper, parser);

        Self {
            config,
            processor,
            failure_log,
        }
    }

    /// 运行应用主逻辑
    ///
    /// 单个文件失败、失败清单不可写、没有结果或报表写入失败都只记录日志
    pub async fn run(&self) -> BatchOutcome {
        log_startup(&self.config);

        let failure_log = match self.failure_log.reset() {
            Ok(()) => Some(&self.failure_log),
            Err(e) => {
                error!("❌ {:#}，本次运行不记录失败清单", e);
                None
            }
        };

        let outcome = self
            .processor
            .process_all_with_log(&self.config.input_folder, failure_log)
            .await;

        if outcome.results.is_empty() {
            warn!("\n⚠️ 没有成功处理任何蛋白");
        } else if let Err(e) = write_report(&outcome.results, Path::new(&self.config.output_file)) {
            error!("❌ 写入 Excel 失败: {:#}", e);
        }

        let stats = BatchStatistics::from_results(&outcome.results);
        print_final_stats(&outcome, &stats, &self.config);

        outcome
    }
}
