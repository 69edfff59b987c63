use std::time::Duration;

/// 程序配置
///
/// 所有路径和时间参数都通过这个结构显式传入编排层，不读取全局状态
#[derive(Clone, Debug)]
pub struct Config {
    /// DeepFRI 服务地址
    pub base_url: String,
    /// 每个请求都携带的客户端标识 (User-Agent)
    pub user_agent: String,
    /// PDB 文件存放目录
    pub input_folder: String,
    /// 输出的 Excel 文件
    pub output_file: String,
    /// 需要处理的文件扩展名（不含点，大小写不敏感）
    pub file_extension: String,
    // --- 轮询配置 ---
    /// 单个任务的最长等待时间（秒）
    pub max_wait_secs: u64,
    /// 轮询间隔（秒）
    pub poll_interval_secs: u64,
    /// 两个文件之间的间隔（秒）
    pub inter_file_delay_secs: u64,
    /// 每个类别最多保留的预测条数
    pub max_predictions: usize,
    // --- 请求超时 ---
    pub upload_timeout_secs: u64,
    pub status_timeout_secs: u64,
    /// 额外的字段别名（TOML 文件，可选）
    pub alias_file: Option<String>,
    /// 失败文件清单
    pub failure_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://beta.deepfri.flatironinstitute.org".to_string(),
            user_agent: "deepfri-batch/0.1".to_string(),
            input_folder: "pdb_files".to_string(),
            output_file: "results.xlsx".to_string(),
            file_extension: "pdb".to_string(),
            max_wait_secs: 300,
            poll_interval_secs: 5,
            inter_file_delay_secs: 2,
            max_predictions: 3,
            upload_timeout_secs: 30,
            status_timeout_secs: 10,
            alias_file: None,
            failure_log_file: "failed.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("DEEPFRI_BASE_URL").unwrap_or(default.base_url),
            user_agent: std::env::var("DEEPFRI_USER_AGENT").unwrap_or(default.user_agent),
            input_folder: std::env::var("PDB_FOLDER").unwrap_or(default.input_folder),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            file_extension: std::env::var("PDB_EXTENSION").unwrap_or(default.file_extension),
            max_wait_secs: std::env::var("MAX_WAIT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_wait_secs),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.poll_interval_secs),
            inter_file_delay_secs: std::env::var("INTER_FILE_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.inter_file_delay_secs),
            max_predictions: std::env::var("MAX_PREDICTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_predictions),
            upload_timeout_secs: std::env::var("UPLOAD_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.upload_timeout_secs),
            status_timeout_secs: std::env::var("STATUS_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.status_timeout_secs),
            alias_file: std::env::var("ALIAS_FILE").ok().filter(|v| !v.is_empty()),
            failure_log_file: std::env::var("FAILURE_LOG_FILE").unwrap_or(default.failure_log_file),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }

    pub fn inter_file_delay(&self) -> Duration {
        Duration::from_secs(self.inter_file_delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_service_etiquette() {
        let config = Config::default();
        assert_eq!(config.max_wait(), Duration::from_secs(300));
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.inter_file_delay(), Duration::from_secs(2));
        assert_eq!(config.max_predictions, 3);
        assert!(config.alias_file.is_none());
    }
}
