/// DeepFRI API 客户端
///
/// 封装上传结构文件和查询任务状态两个接口
use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::models::aliases::JOB_ID_KEYS;
use crate::models::protein_id_from_path;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::debug;

const PDB_MIME: &str = "chemical/x-pdb";

/// 服务端任务 ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 预测服务接口
///
/// 轮询器和批处理只依赖这个 trait，测试中使用内存实现替代
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// 上传结构文件，返回任务 ID
    async fn upload(&self, path: &Path) -> PipelineResult<JobId>;

    /// 查询任务状态，返回完整的 JSON 响应
    async fn fetch_status(&self, job_id: &JobId) -> PipelineResult<Value>;
}

/// DeepFRI 客户端
pub struct DeepFriClient {
    http: reqwest::Client,
    base_url: String,
    upload_timeout: Duration,
    status_timeout: Duration,
}

impl DeepFriClient {
    /// 创建新的客户端
    ///
    /// 所有请求都携带配置中的 User-Agent
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("无法创建 HTTP 客户端")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
            status_timeout: Duration::from_secs(config.status_timeout_secs),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/api/predict", self.base_url)
    }

    fn status_url(&self, job_id: &JobId) -> String {
        format!("{}/api/status/{}", self.base_url, job_id)
    }
}

#[async_trait]
impl PredictionApi for DeepFriClient {
    async fn upload(&self, path: &Path) -> PipelineResult<JobId> {
        let endpoint = self.predict_url();

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| PipelineError::ReadFile {
                path: path.display().to_string(),
                source: e,
            })?;

        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let job_name = protein_id_from_path(path);

        debug!("上传 {} ({} 字节), job_name={}", file_name, content.len(), job_name);

        let part = Part::text(content)
            .file_name(file_name)
            .mime_str(PDB_MIME)
            .map_err(|e| PipelineError::Request {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        let form = Form::new().part("pdb_file", part).text("job_name", job_name);

        let response = self
            .http
            .post(&endpoint)
            .multipart(form)
            .timeout(self.upload_timeout)
            .send()
            .await
            .map_err(|e| PipelineError::Request {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(PipelineError::BadStatus {
                endpoint,
                status: response.status().as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PipelineError::InvalidJson {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        extract_job_id(&body).ok_or(PipelineError::MissingJobId { endpoint })
    }

    async fn fetch_status(&self, job_id: &JobId) -> PipelineResult<Value> {
        let endpoint = self.status_url(job_id);

        let response = self
            .http
            .get(&endpoint)
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| PipelineError::Request {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(PipelineError::BadStatus {
                endpoint,
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| PipelineError::InvalidJson { endpoint, source: e })
    }
}

/// 从上传响应中提取任务 ID
///
/// 依次尝试 `job_id` 和 `id`，接受非空字符串或数字
pub fn extract_job_id(body: &Value) -> Option<JobId> {
    JOB_ID_KEYS.iter().find_map(|key| match body.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(JobId(s.clone())),
        Some(Value::Number(n)) => Some(JobId(n.to_string())),
        _ => None,
    })
}
