use thiserror::Error;

/// 单个文件处理过程中的错误
///
/// 所有变体都只影响当前文件，批处理会跳过该文件继续执行
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 读取结构文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 网络请求失败（连接错误、超时等）
    #[error("请求失败 ({endpoint}): {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 服务返回非成功状态码
    #[error("服务返回错误状态 ({endpoint}): HTTP {status}")]
    BadStatus { endpoint: String, status: u16 },

    /// 响应体不是合法 JSON
    #[error("JSON解析失败 ({endpoint}): {source}")]
    InvalidJson {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 上传成功但响应中没有任务 ID
    #[error("上传响应中缺少任务ID ({endpoint})")]
    MissingJobId { endpoint: String },

    /// 上传失败（包装上面的底层错误，附带文件名）
    #[error("上传失败 {file}: {source}")]
    Upload {
        file: String,
        #[source]
        source: Box<PipelineError>,
    },

    /// 任务在等待时间内没有结束
    #[error("任务 {job_id} 超时 (已等待 {waited_secs}s)")]
    PollTimeout { job_id: String, waited_secs: u64 },

    /// 服务报告任务失败
    #[error("任务 {job_id} 处理失败")]
    PollFailure { job_id: String },

    /// 别名配置文件错误
    #[error("别名配置文件错误 ({path}): {message}")]
    AliasFile { path: String, message: String },
}

impl PipelineError {
    /// 包装为上传错误
    pub fn upload(file: impl Into<String>, source: PipelineError) -> Self {
        PipelineError::Upload {
            file: file.into(),
            source: Box::new(source),
        }
    }

    /// 简短的分类名，写入失败清单
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::ReadFile { .. }
            | PipelineError::Request { .. }
            | PipelineError::BadStatus { .. }
            | PipelineError::InvalidJson { .. }
            | PipelineError::MissingJobId { .. }
            | PipelineError::Upload { .. } => "upload",
            PipelineError::PollTimeout { .. } => "timeout",
            PipelineError::PollFailure { .. } => "failed",
            PipelineError::AliasFile { .. } => "config",
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_wraps_file_name() {
        let err = PipelineError::upload(
            "1abc.pdb",
            PipelineError::BadStatus {
                endpoint: "/api/predict".to_string(),
                status: 500,
            },
        );
        let msg = err.to_string();
        assert!(msg.contains("1abc.pdb"));
        assert!(msg.contains("500"));
        assert_eq!(err.kind(), "upload");
    }

    #[test]
    fn test_kind_for_poll_errors() {
        let timeout = PipelineError::PollTimeout {
            job_id: "j1".to_string(),
            waited_secs: 300,
        };
        let failed = PipelineError::PollFailure {
            job_id: "j1".to_string(),
        };
        assert_eq!(timeout.kind(), "timeout");
        assert_eq!(failed.kind(), "failed");
    }
}
