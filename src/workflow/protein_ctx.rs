//! 蛋白处理上下文
//!
//! 封装"我正在处理第几个文件、哪个蛋白"这一信息

use std::fmt::Display;
use std::path::PathBuf;

/// 单个结构文件的处理上下文
#[derive(Debug, Clone)]
pub struct ProteinCtx {
    /// 文件序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 文件总数
    pub total: usize,

    /// 蛋白 ID（文件名去掉扩展名）
    pub protein_id: String,

    /// 结构文件路径
    pub path: PathBuf,
}

impl ProteinCtx {
    pub fn new(index: usize, total: usize, path: PathBuf) -> Self {
        let protein_id = crate::models::protein_id_from_path(&path);
        Self {
            index,
            total,
            protein_id,
            path,
        }
    }

    /// 文件名（带扩展名），用于失败清单
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.protein_id.clone())
    }

    pub fn is_last(&self) -> bool {
        self.index >= self.total
    }
}

impl Display for ProteinCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{} {}]", self.index, self.total, self.protein_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctx_display_and_names() {
        let ctx = ProteinCtx::new(2, 3, PathBuf::from("/data/1abc.pdb"));
        assert_eq!(ctx.protein_id, "1abc");
        assert_eq!(ctx.file_name(), "1abc.pdb");
        assert_eq!(ctx.to_string(), "[2/3 1abc]");
        assert!(!ctx.is_last());
        assert!(ProteinCtx::new(3, 3, PathBuf::from("x.pdb")).is_last());
    }
}
