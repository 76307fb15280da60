//! Word Converter
//!
//! 段落を見出し行または本文行に、表をパイプテーブルのブロック列に変換します。

use crate::api::HeadingStylePolicy;
use crate::error::{MarkdownifyError, Result};
use crate::markdown::{pipe_row, separator_row, MarkdownDocument};
use crate::types::{Paragraph, WordDocument, WordTable};

/// 見出しスタイルとみなすスタイル名の接頭辞
const HEADING_PREFIX: &str = "Heading";

/// 表ブロックの見出し
const TABLE_HEADING: &str = "### 表格提取\n";

/// スタイル名の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// 見出しスタイルではない
    NotHeading,
    /// 見出しレベル（`Heading 0`は0）
    Level(usize),
    /// `Heading`で始まるが、レベルを解析できない
    Malformed,
}

/// スタイル名を見出しとして分類する
///
/// `Heading`で始まるスタイル名について、最初の空白の次のトークンを
/// 見出しレベルとして解析します（例: `Heading 2` → `Level(2)`）。
/// トークンがない、または整数でない場合は`Malformed`です。
///
/// ```rust
/// use markdownify::{classify_heading_style, HeadingStyle};
///
/// assert_eq!(classify_heading_style("Heading 3"), HeadingStyle::Level(3));
/// assert_eq!(classify_heading_style("Normal"), HeadingStyle::NotHeading);
/// assert_eq!(classify_heading_style("Heading"), HeadingStyle::Malformed);
/// ```
pub fn classify_heading_style(style_name: &str) -> HeadingStyle {
    if !style_name.starts_with(HEADING_PREFIX) {
        return HeadingStyle::NotHeading;
    }

    match style_name.split(' ').nth(1).map(str::parse::<usize>) {
        Some(Ok(level)) => HeadingStyle::Level(level),
        _ => HeadingStyle::Malformed,
    }
}

/// スタイル名から見出しレベルを取得する
///
/// 見出しでない場合、またはレベルを解析できない場合は`None`を返します。
pub fn heading_level(style_name: &str) -> Option<usize> {
    match classify_heading_style(style_name) {
        HeadingStyle::Level(level) => Some(level),
        HeadingStyle::NotHeading | HeadingStyle::Malformed => None,
    }
}

/// Word文書をMarkdownに変換
///
/// すべての段落を出力した後に、すべての表を出力します。
pub(crate) fn convert_document(
    document: &WordDocument,
    policy: HeadingStylePolicy,
) -> Result<MarkdownDocument> {
    let mut markdown = MarkdownDocument::new();

    for paragraph in &document.paragraphs {
        markdown.push(paragraph_line(paragraph, policy)?);
    }

    for table in &document.tables {
        markdown.push("\n");
        markdown.push(TABLE_HEADING);
        markdown.extend(table_rows(table));
    }

    log::debug!(
        "word: {} paragraphs, {} tables",
        document.paragraphs.len(),
        document.tables.len()
    );

    Ok(markdown)
}

/// 段落を1行に変換
fn paragraph_line(paragraph: &Paragraph, policy: HeadingStylePolicy) -> Result<String> {
    match classify_heading_style(&paragraph.style_name) {
        HeadingStyle::Level(level) => Ok(format!("{} {}", "#".repeat(level), paragraph.text)),
        HeadingStyle::NotHeading => Ok(paragraph.text.clone()),
        HeadingStyle::Malformed => match policy {
            HeadingStylePolicy::Strict => Err(MarkdownifyError::MalformedHeadingStyle {
                style: paragraph.style_name.clone(),
            }),
            HeadingStylePolicy::Lenient => {
                log::warn!(
                    "heading style '{}' has no level, emitting as plain text",
                    paragraph.style_name
                );
                Ok(paragraph.text.clone())
            }
        },
    }
}

/// 表をパイプ行の列に変換
///
/// 先頭行（ヘッダー）の直後に区切り行を挿入します。区切り行の列数は
/// 行の実セル数ではなく、表で宣言された列数に従います。
fn table_rows(table: &WordTable) -> Vec<String> {
    let mut rows: Vec<String> = table.rows.iter().map(|row| pipe_row(row)).collect();
    if !rows.is_empty() {
        rows.insert(1, separator_row(table.column_count));
    }
    rows
}
