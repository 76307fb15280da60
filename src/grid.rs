//! Grid Module
//!
//! ヘッダー行とデータ行からなる表を、表示幅を揃えたMarkdownパイプテーブルへ
//! 描画するモジュール。PDF変換器とExcel変換器の両方が同じ描画規則を使います。

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::markdown::escape_cell;

/// ヘッダー付きの表グリッド
///
/// すべての行は最も長い行の列数に揃えられます（不足分は空セル）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableGrid {
    /// グリッドデータ（行 × 列）。先頭行がヘッダー
    cells: Vec<Vec<String>>,

    /// 列数
    cols: usize,
}

impl TableGrid {
    /// ヘッダー行とデータ行からグリッドを構築
    ///
    /// # 引数
    ///
    /// * `header` - ヘッダー行
    /// * `rows` - データ行
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut cells = Vec::with_capacity(rows.len() + 1);
        cells.push(header);
        cells.extend(rows);

        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(cols, String::new());
        }

        Self { cells, cols }
    }

    /// 先頭行をヘッダーとして分割し、グリッドを構築
    ///
    /// 行が1つもない場合は`None`を返します。
    pub fn from_table(mut table: Vec<Vec<String>>) -> Option<Self> {
        if table.is_empty() {
            return None;
        }
        let header = table.remove(0);
        Some(Self::from_rows(header, table))
    }

    /// 行数（ヘッダー行を含む）
    pub(crate) fn get_rows(&self) -> usize {
        self.cells.len()
    }

    /// 列数
    pub(crate) fn get_cols(&self) -> usize {
        self.cols
    }

    /// Markdownテーブルとして出力
    ///
    /// 各行の末尾に改行を出力します。列数が0の場合は何も出力しません。
    pub fn render_markdown<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.cols == 0 {
            return Ok(());
        }

        // 1. セル内容をtrim・エスケープ
        let rendered: Vec<Vec<String>> = self
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| escape_cell(cell.trim())).collect())
            .collect();

        // 2. 列幅の計算
        let col_widths = Self::calculate_column_widths(&rendered, self.cols);

        // 3. ヘッダー区切り行
        let separator = Self::generate_separator(&col_widths);

        // 4. 各行の出力
        for (row_idx, row) in rendered.iter().enumerate() {
            write!(writer, "|")?;

            for (col_idx, content) in row.iter().enumerate() {
                let width = col_widths[col_idx];
                // 表示幅を計算（全角文字は2、半角文字は1）
                let content_width = content.width();

                write!(writer, " {}", content)?;
                // 残りのスペースを埋める（表示幅に基づく）
                if content_width < width {
                    write!(writer, "{}", " ".repeat(width - content_width))?;
                }
                write!(writer, " |")?;
            }

            writeln!(writer)?;

            // 最初の行の後に区切り行を挿入
            if row_idx == 0 {
                writeln!(writer, "{}", separator)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    /// Markdownテーブルを文字列として返す（末尾の改行なし）
    pub fn to_markdown(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.render_markdown(&mut buffer)?;
        let mut markdown = String::from_utf8_lossy(&buffer).into_owned();
        while markdown.ends_with('\n') {
            markdown.pop();
        }
        Ok(markdown)
    }

    /// 列幅を計算（内部ヘルパー）
    ///
    /// 最小幅は3文字（区切り行の最小幅）。全角文字は表示幅2として計算します。
    fn calculate_column_widths(rows: &[Vec<String>], cols: usize) -> Vec<usize> {
        let mut widths = vec![3; cols];

        for row in rows {
            for (col_idx, content) in row.iter().enumerate() {
                widths[col_idx] = widths[col_idx].max(content.width());
            }
        }

        widths
    }

    /// ヘッダー区切り行を生成（内部ヘルパー）
    ///
    /// セルの前後のスペース（各1文字）を含めた幅だけ `-` を並べます。
    fn generate_separator(col_widths: &[usize]) -> String {
        let mut separator = String::from("|");
        for &width in col_widths {
            separator.push_str(&"-".repeat(width + 2));
            separator.push('|');
        }
        separator
    }
}
