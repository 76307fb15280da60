//! Excel Converter
//!
//! シートごとに見出しとMarkdownテーブルを出力します。

use crate::error::Result;
use crate::grid::TableGrid;
use crate::markdown::MarkdownDocument;
use crate::types::Workbook;

/// 文書の先頭に置く固定の見出し
const LEADING_HEADING: &str = "## Excel 表格转换\n";

/// ワークブックをMarkdownに変換
///
/// 各シートは `### 工作表: <シート名>` の見出しと、末尾に空行を伴う表になります。
/// 空のシートは表を持たず、空行だけが出力されます。
pub(crate) fn convert_workbook(workbook: &Workbook) -> Result<MarkdownDocument> {
    let mut markdown = MarkdownDocument::new();
    markdown.push(LEADING_HEADING);

    for sheet in &workbook.sheets {
        markdown.push(format!("### 工作表: {}", sheet.name));

        let table = match TableGrid::from_table(sheet.rows.clone()) {
            Some(grid) => grid.to_markdown()?,
            None => String::new(),
        };
        markdown.push(format!("{}\n", table));

        log::debug!("excel: sheet '{}' with {} rows", sheet.name, sheet.rows.len());
    }

    Ok(markdown)
}
