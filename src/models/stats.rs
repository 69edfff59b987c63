use crate::models::prediction::{Category, ProteinResult};

/// 批处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStatistics {
    pub total_proteins: usize,
    /// 使用基于结构的预测填充的类别数
    pub structure_based: usize,
    /// 使用基于序列的预测兜底的类别数
    pub sequence_based: usize,
    /// 没有任何预测的类别数
    pub empty: usize,
}

impl BatchStatistics {
    pub fn from_results(results: &[ProteinResult]) -> Self {
        let mut stats = Self {
            total_proteins: results.len(),
            ..Default::default()
        };

        for result in results {
            for category in Category::ALL {
                let cat = result.category(category);
                if cat.is_empty() {
                    stats.empty += 1;
                } else if cat.used_fallback {
                    stats.sequence_based += 1;
                } else {
                    stats.structure_based += 1;
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prediction::{CategoryResult, PredictionItem};

    fn filled(used_fallback: bool) -> CategoryResult {
        CategoryResult {
            items: vec![PredictionItem {
                term: "GO:1".to_string(),
                display_name: "x".to_string(),
                score: 0.5,
            }],
            used_fallback,
        }
    }

    #[test]
    fn test_counts_each_category_once() {
        let results = vec![
            ProteinResult {
                protein_id: "a".to_string(),
                molecular_function: filled(false),
                biological_process: filled(true),
                enzyme_commission: CategoryResult::default(),
            },
            ProteinResult {
                protein_id: "b".to_string(),
                molecular_function: filled(false),
                biological_process: filled(false),
                enzyme_commission: filled(true),
            },
        ];

        let stats = BatchStatistics::from_results(&results);
        assert_eq!(stats.total_proteins, 2);
        assert_eq!(stats.structure_based, 3);
        assert_eq!(stats.sequence_based, 2);
        assert_eq!(stats.empty, 1);
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(BatchStatistics::from_results(&[]), BatchStatistics::default());
    }
}
