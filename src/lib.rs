//! # DeepFRI Batch
//!
//! 把一个文件夹里的蛋白结构文件 (PDB) 逐个上传到 DeepFRI 预测服务，
//! 轮询任务完成，解析功能注释，最后汇总成一个 Excel 表格。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure / Clients）
//! - `clients/` - `PredictionApi` 接口和基于 reqwest 的 `DeepFriClient`
//! - `infrastructure/` - `Sleeper` 等待能力，测试中可替换
//!
//! ### ② 业务能力层（Services）
//! - `JobPoller` - 固定间隔轮询任务状态
//! - `ResultParser` - 按别名解析三个类别，结构预测优先、序列预测兜底
//! - `write_report` - 写 Excel
//! - `FailureLog` - 写失败清单
//!
//! ### ③ 流程层（Workflow）
//! - `ProteinFlow` - 一个文件的完整流程（上传 → 轮询 → 解析）
//!
//! ### ④ 编排层（Orchestration）
//! - `BatchProcessor` - 顺序处理整个文件夹
//! - `App` - 组装各层，输出报表和统计

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{DeepFriClient, JobId, PredictionApi};
pub use config::Config;
pub use error::{PipelineError, PipelineResult};
pub use infrastructure::{Sleeper, TokioSleeper};
pub use models::{AliasTable, Category, CategoryResult, PredictionItem, ProteinResult};
pub use orchestrator::{App, BatchOutcome, BatchProcessor};
pub use services::{JobPoller, PollOutcome, PollState, ResultParser};
