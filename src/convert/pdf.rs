//! PDF Converter
//!
//! ページごとの抽出テキストと、検出された表を順に出力します。

use crate::error::Result;
use crate::grid::TableGrid;
use crate::markdown::MarkdownDocument;
use crate::types::PdfDocument;

/// 文書の先頭に置く固定の見出し
const LEADING_HEADING: &str = "## PDF 内容提取\n";

/// 表ブロックの見出し（前に空行を置く）
const TABLE_HEADING: &str = "\n### PDF表格\n";

/// PDF文書をMarkdownに変換
///
/// 抽出テキストがないページも空文字列のブロックとして出力に残します。
pub(crate) fn convert_document(document: &PdfDocument) -> Result<MarkdownDocument> {
    let mut markdown = MarkdownDocument::new();
    markdown.push(LEADING_HEADING);

    for (index, page) in document.pages.iter().enumerate() {
        let text = page.text.as_deref().unwrap_or_default();
        if text.is_empty() {
            log::debug!("pdf: page {} has no extractable text", index + 1);
        }
        markdown.push(text);

        for table in &page.tables {
            if let Some(grid) = TableGrid::from_table(table.clone()) {
                log::debug!(
                    "pdf: page {} table {}x{}",
                    index + 1,
                    grid.get_rows(),
                    grid.get_cols()
                );
                markdown.push(format!("{}{}", TABLE_HEADING, grid.to_markdown()?));
            }
        }
    }

    Ok(markdown)
}
