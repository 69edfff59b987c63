/// 日志工具模块
///
/// 提供批处理各阶段的日志输出
use crate::config::Config;
use crate::models::BatchStatistics;
use crate::orchestrator::BatchOutcome;
use crate::workflow::ProteinCtx;
use tracing::{info, warn};

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(70));
    info!("     DeepFRI 蛋白功能预测 (Web API)");
    info!("{}", "=".repeat(70));
    info!("📂 输入目录: {}", config.input_folder);
    info!("📄 输出文件: {}", config.output_file);
    info!("🌐 服务地址: {}", config.base_url);
    info!(
        "⏱️ 单任务最长等待 {}s，轮询间隔 {}s，文件间隔 {}s",
        config.max_wait_secs, config.poll_interval_secs, config.inter_file_delay_secs
    );
}

/// 记录文件扫描结果
pub fn log_files_found(total: usize) {
    info!("📁 找到 {} 个结构文件", total);
    info!("{}", "=".repeat(70));
}

/// 记录单个文件开始处理
pub fn log_item_start(ctx: &ProteinCtx) {
    info!("\n{}", "─".repeat(40));
    info!("[{}/{}] {}", ctx.index, ctx.total, ctx.path.display());
}

/// 打印最终统计信息
pub fn print_final_stats(outcome: &BatchOutcome, stats: &BatchStatistics, config: &Config) {
    info!("\n{}", "=".repeat(70));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(70));
    info!("✅ 成功: {}/{}", outcome.results.len(), outcome.total);
    info!("❌ 失败: {}", outcome.failures.len());
    for failure in &outcome.failures {
        warn!("   - {} [{}]: {}", failure.file, failure.kind, failure.reason);
    }
    info!(
        "🧬 类别统计: 基于结构 {} / 基于序列 {} / 无预测 {}",
        stats.structure_based, stats.sequence_based, stats.empty
    );
    info!("{}", "=".repeat(70));
    if !outcome.failures.is_empty() {
        info!("\n失败清单已保存至: {}", config.failure_log_file);
    }
}
