//! 失败清单服务 - 业务能力层
//!
//! 只负责"记录哪个文件没处理成功"，不关心流程

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::debug;

/// 失败清单写入器
///
/// 每行一条：`文件名 | 原因`
pub struct FailureLog {
    path: String,
}

impl FailureLog {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 清空清单并写入本次运行的表头
    pub fn reset(&self) -> Result<()> {
        let header = format!(
            "{}\n失败文件清单 - {}\n{}\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(&self.path, header)
            .with_context(|| format!("无法写入失败清单: {}", self.path))?;
        Ok(())
    }

    /// 追加一条失败记录
    pub fn record(&self, file: &str, reason: &str) -> Result<()> {
        debug!("写入失败记录: {} | {}", file, reason);

        let mut handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("无法打开失败清单: {}", self.path))?;

        writeln!(handle, "{} | {}", file, reason.replace('\n', " "))
            .with_context(|| format!("无法写入失败清单: {}", self.path))?;

        Ok(())
    }
}
