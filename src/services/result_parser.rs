//! 结果解析服务 - 业务能力层
//!
//! 把服务端的原始 JSON 响应映射到三个固定类别。每个类别先找基于结构的预测
//! (`structure_<alias>`)，找不到再用基于序列的预测 (`sequence_<alias>`) 兜底。
//! 字段缺失或类型不对时使用默认值，永远不会返回错误。

use crate::models::aliases::{
    AliasTable, NAME_KEYS, SCORE_KEYS, SEQUENCE_PREFIX, STRUCTURE_PREFIX, TERM_KEYS,
};
use crate::models::prediction::{Category, CategoryResult, PredictionItem, ProteinResult};
use serde_json::Value;
use tracing::debug;

/// 结果解析器
#[derive(Debug, Clone)]
pub struct ResultParser {
    aliases: AliasTable,
    max_predictions: usize,
}

impl ResultParser {
    pub fn new(aliases: AliasTable, max_predictions: usize) -> Self {
        Self {
            aliases,
            max_predictions,
        }
    }

    /// 解析完整响应
    pub fn parse(&self, protein_id: &str, response: &Value) -> ProteinResult {
        ProteinResult {
            protein_id: protein_id.to_string(),
            molecular_function: self.parse_category(response, Category::MolecularFunction),
            biological_process: self.parse_category(response, Category::BiologicalProcess),
            enzyme_commission: self.parse_category(response, Category::EnzymeCommission),
        }
    }

    /// 解析单个类别
    pub fn parse_category(&self, response: &Value, category: Category) -> CategoryResult {
        let structure_keys = self.aliases.prefixed_keys(category, STRUCTURE_PREFIX);
        if let Some(list) = first_non_empty_list(response, &structure_keys) {
            return CategoryResult {
                items: self.take_items(list),
                used_fallback: false,
            };
        }

        let sequence_keys = self.aliases.prefixed_keys(category, SEQUENCE_PREFIX);
        if let Some(list) = first_non_empty_list(response, &sequence_keys) {
            debug!("{} 没有基于结构的预测，使用基于序列的预测", category);
            return CategoryResult {
                items: self.take_items(list),
                used_fallback: true,
            };
        }

        CategoryResult::default()
    }

    fn take_items(&self, list: &[Value]) -> Vec<PredictionItem> {
        list.iter()
            .take(self.max_predictions)
            .map(parse_item)
            .collect()
    }
}

impl Default for ResultParser {
    fn default() -> Self {
        Self::new(AliasTable::default(), 3)
    }
}

/// 第一个存在且非空的列表
fn first_non_empty_list<'a>(response: &'a Value, keys: &[String]) -> Option<&'a [Value]> {
    keys.iter()
        .filter_map(|key| response.get(key.as_str()))
        .filter_map(|v| v.as_array())
        .find(|list| !list.is_empty())
        .map(|list| list.as_slice())
}

/// 第一个存在且非 null 的字段
fn first_present<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|v| !v.is_null())
}

fn text_field(raw: &Value, keys: &[&str]) -> String {
    match first_present(raw, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn score_field(raw: &Value, keys: &[&str]) -> f64 {
    match first_present(raw, keys) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn parse_item(raw: &Value) -> PredictionItem {
    PredictionItem {
        term: text_field(raw, TERM_KEYS),
        display_name: text_field(raw, NAME_KEYS),
        score: score_field(raw, SCORE_KEYS),
    }
}
