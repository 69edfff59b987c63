//! 响应字段别名
//!
//! 服务端的字段命名并不稳定，同一个类别可能出现 `mf` / `molecular_function` / `MF`
//! 等多种写法。这里把每个逻辑字段表示为一个按优先级排列的候选键列表。

use crate::models::prediction::Category;
use std::collections::HashMap;

/// 基于结构的预测键前缀
pub const STRUCTURE_PREFIX: &str = "structure_";
/// 基于序列的预测键前缀
pub const SEQUENCE_PREFIX: &str = "sequence_";

/// 预测条目中的 term 字段候选键
pub const TERM_KEYS: &[&str] = &["term", "go_term", "id"];
/// 预测条目中的名称字段候选键
pub const NAME_KEYS: &[&str] = &["name", "description"];
/// 预测条目中的分数字段候选键
pub const SCORE_KEYS: &[&str] = &["score", "confidence"];

/// 上传响应中的任务 ID 候选键
pub const JOB_ID_KEYS: &[&str] = &["job_id", "id"];

/// 类别 → 别名列表
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    aliases: HashMap<Category, Vec<String>>,
}

impl AliasTable {
    /// 获取某个类别的别名（按优先级）
    pub fn aliases(&self, category: Category) -> &[String] {
        self.aliases
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 追加别名，已存在的跳过
    pub fn extend<I, S>(&mut self, category: Category, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.aliases.entry(category).or_default();
        for alias in extra {
            let alias = alias.into();
            if !alias.is_empty() && !list.contains(&alias) {
                list.push(alias);
            }
        }
    }

    /// 带前缀的候选键，例如 `structure_mf`
    pub fn prefixed_keys(&self, category: Category, prefix: &str) -> Vec<String> {
        self.aliases(category)
            .iter()
            .map(|alias| format!("{}{}", prefix, alias))
            .collect()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        let mut table = Self {
            aliases: HashMap::new(),
        };
        table.extend(Category::MolecularFunction, ["mf", "molecular_function", "MF"]);
        table.extend(Category::BiologicalProcess, ["bp", "biological_process", "BP"]);
        table.extend(Category::EnzymeCommission, ["ec", "enzyme_commission", "EC"]);
        table
    }
}
