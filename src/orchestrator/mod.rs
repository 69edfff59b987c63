//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 组装客户端、轮询器、解析器
//! - 写出 Excel 报表和最终统计
//!
//! ### `batch_processor` - 批量处理器
//! - 扫描结构文件，逐个处理
//! - 失败隔离、文件间限速
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! workflow::ProteinFlow (处理单个文件)
//!     ↓
//! services (能力层：poller / parser / report / failure log)
//!     ↓
//! clients + infrastructure (HTTP 客户端、等待)
//! ```

pub mod app;
pub mod batch_processor;

pub use app::App;
pub use batch_processor::{BatchOutcome, BatchProcessor, FileFailure};
