use std::fmt;

/// 注释类别（本体）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 分子功能 (GO:MF)
    MolecularFunction,
    /// 生物过程 (GO:BP)
    BiologicalProcess,
    /// 酶学委员会编号 (EC)
    EnzymeCommission,
}

impl Category {
    /// 报表列顺序
    pub const ALL: [Category; 3] = [
        Category::MolecularFunction,
        Category::BiologicalProcess,
        Category::EnzymeCommission,
    ];

    /// 内部键名，也是别名配置文件中的键
    pub fn key(self) -> &'static str {
        match self {
            Category::MolecularFunction => "molecular_function",
            Category::BiologicalProcess => "biological_process",
            Category::EnzymeCommission => "enzyme_commission",
        }
    }

    /// 报表表头
    pub fn header(self) -> &'static str {
        match self {
            Category::MolecularFunction => "Molecular Function",
            Category::BiologicalProcess => "Biological Process",
            Category::EnzymeCommission => "Enzyme Commission",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "molecular_function" => Some(Category::MolecularFunction),
            "biological_process" => Some(Category::BiologicalProcess),
            "enzyme_commission" => Some(Category::EnzymeCommission),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// 单条预测注释
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionItem {
    /// GO 编号或 EC 编号
    pub term: String,
    /// 功能名称
    pub display_name: String,
    /// 置信度
    pub score: f64,
}

impl fmt::Display for PredictionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.display_name, self.term, self.score)
    }
}

/// 一个类别的预测结果
///
/// `items` 保持服务端的原始排序，最多 `max_predictions` 条
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryResult {
    pub items: Vec<PredictionItem>,
    /// 是否使用了基于序列的预测（没有基于结构的预测时的兜底）
    pub used_fallback: bool,
}

impl CategoryResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 每条预测格式化为一行文本
    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(|item| item.to_string()).collect()
    }

    /// 报表单元格内容：多条预测用换行分隔
    pub fn cell_text(&self) -> String {
        self.lines().join("\n")
    }
}

/// 一个蛋白质的完整结果
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinResult {
    /// 蛋白 ID（文件名去掉扩展名）
    pub protein_id: String,
    pub molecular_function: CategoryResult,
    pub biological_process: CategoryResult,
    pub enzyme_commission: CategoryResult,
}

impl ProteinResult {
    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::MolecularFunction => &self.molecular_function,
            Category::BiologicalProcess => &self.biological_process,
            Category::EnzymeCommission => &self.enzyme_commission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(term: &str, name: &str, score: f64) -> PredictionItem {
        PredictionItem {
            term: term.to_string(),
            display_name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_item_display_rounds_score() {
        assert_eq!(
            item("GO:0001", "kinase activity", 0.91).to_string(),
            "kinase activity GO:0001 0.91"
        );
        assert_eq!(item("3.2.1.1", "amylase", 0.5).to_string(), "amylase 3.2.1.1 0.50");
        assert_eq!(item("", "", 0.0).to_string(), "  0.00");
    }

    #[test]
    fn test_cell_text_joins_with_newlines() {
        let result = CategoryResult {
            items: vec![item("GO:1", "a", 0.9), item("GO:2", "b", 0.8)],
            used_fallback: false,
        };
        assert_eq!(result.cell_text(), "a GO:1 0.90\nb GO:2 0.80");
        assert_eq!(CategoryResult::default().cell_text(), "");
    }

    #[test]
    fn test_category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("mf"), None);
    }
}
