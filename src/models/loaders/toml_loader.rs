use crate::error::{PipelineError, PipelineResult};
use crate::models::aliases::AliasTable;
use crate::models::prediction::Category;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// 别名配置文件格式
///
/// 键必须是类别的内部键名，值是追加的别名列表：
///
/// ```toml
/// molecular_function = ["go_mf"]
/// enzyme_commission = ["ec_number"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct AliasOverrides(BTreeMap<String, Vec<String>>);

/// 从 TOML 文本解析别名表（追加在默认别名之后）
pub fn parse_alias_table(content: &str, source: &str) -> PipelineResult<AliasTable> {
    let overrides: AliasOverrides = toml::from_str(content).map_err(|e| PipelineError::AliasFile {
        path: source.to_string(),
        message: e.to_string(),
    })?;

    let mut table = AliasTable::default();
    for (key, aliases) in overrides.0 {
        let category = Category::from_key(&key).ok_or_else(|| PipelineError::AliasFile {
            path: source.to_string(),
            message: format!("未知的类别: {}", key),
        })?;
        table.extend(category, aliases);
    }
    Ok(table)
}

/// 从 TOML 文件加载别名表
pub async fn load_alias_table(path: &Path) -> PipelineResult<AliasTable> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| PipelineError::AliasFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let table = parse_alias_table(&content, &path.display().to_string())?;
    tracing::info!("已加载别名配置: {}", path.display());
    Ok(table)
}
