//! Excel 报表服务 - 业务能力层
//!
//! 每个蛋白一行，每个类别一列。使用基于序列兜底预测的单元格填充浅红色背景，
//! 提醒这些注释的可信度不同于基于结构的预测。

use crate::models::prediction::{Category, ProteinResult};
use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 表头
pub const HEADERS: [&str; 4] = [
    "Protein ID",
    "Molecular Function",
    "Biological Process",
    "Enzyme Commission",
];

const SHEET_NAME: &str = "Results";
const FALLBACK_FILL: u32 = 0xFFC7CE;
const ID_COLUMN_WIDTH: f64 = 20.0;
const ANNOTATION_COLUMN_WIDTH: f64 = 60.0;
const DATA_ROW_HEIGHT: f64 = 60.0;

/// 一行报表数据
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub cells: [String; 4],
    /// 对应单元格是否需要高亮
    pub highlight: [bool; 4],
}

/// 把结果转换为报表行
pub fn build_rows(results: &[ProteinResult]) -> Vec<ReportRow> {
    results
        .iter()
        .map(|result| {
            let mut cells: [String; 4] = Default::default();
            let mut highlight = [false; 4];

            cells[0] = result.protein_id.clone();
            for (offset, category) in Category::ALL.iter().enumerate() {
                let cat = result.category(*category);
                cells[offset + 1] = cat.cell_text();
                highlight[offset + 1] = cat.used_fallback;
            }

            ReportRow { cells, highlight }
        })
        .collect()
}

/// 写入 Excel 文件（已存在则覆盖）
///
/// # 返回
/// 没有结果时不写文件，返回 `false`
pub fn write_report(results: &[ProteinResult], output_path: &Path) -> Result<bool> {
    if results.is_empty() {
        warn!("❌ 没有可保存的结果");
        return Ok(false);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建输出目录: {}", parent.display()))?;
        }
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_size(11)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let cell_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);
    let fallback_format = cell_format
        .clone()
        .set_background_color(Color::RGB(FALLBACK_FILL));

    let mut workbook = Workbook::new();
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (idx, row) in build_rows(results).iter().enumerate() {
            let row_num = (idx + 1) as u32;
            for (col, text) in row.cells.iter().enumerate() {
                let format = if row.highlight[col] {
                    &fallback_format
                } else {
                    &cell_format
                };
                worksheet.write_string_with_format(row_num, col as u16, text.as_str(), format)?;
            }
            worksheet.set_row_height(row_num, DATA_ROW_HEIGHT)?;
        }

        worksheet.set_column_width(0, ID_COLUMN_WIDTH)?;
        for col in 1..HEADERS.len() {
            worksheet.set_column_width(col as u16, ANNOTATION_COLUMN_WIDTH)?;
        }
    }

    workbook
        .save(output_path)
        .with_context(|| format!("无法保存 Excel 文件: {}", output_path.display()))?;

    info!("✅ 结果已保存至: {}", output_path.display());
    Ok(true)
}
