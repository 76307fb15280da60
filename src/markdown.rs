//! Markdown Document Module
//!
//! 変換結果を表す順序付きブロック列と、パイプテーブルの行を組み立てる
//! 基本関数を提供するモジュール。

/// 変換結果のMarkdown文書
///
/// ブロック（1行、または表のような複数行のかたまり）を入力の順序どおりに
/// 追記していくだけの構造です。並べ替えや重複除去は行いません。
/// 最終的な出力は、すべてのブロックを改行で連結したものです。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    blocks: Vec<String>,
}

impl MarkdownDocument {
    /// 空の文書を生成
    pub fn new() -> Self {
        Self::default()
    }

    /// ブロックを末尾に追加
    pub fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    /// 複数のブロックを順に追加
    pub fn extend<I, S>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.extend(blocks.into_iter().map(Into::into));
    }

    /// ブロック列を参照
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// ブロック数
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// ブロックが1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// すべてのブロックを改行で連結した文字列を返す
    pub fn render(&self) -> String {
        self.blocks.join("\n")
    }
}

/// セル文字列をパイプテーブル内で安全な形にエスケープ
///
/// `|` は `\|` に、改行は `<br>` に置き換えます。
pub(crate) fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}

/// セル列をパイプ区切りの1行に整形する
///
/// `["A", "B"]` → `| A | B |`
pub(crate) fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let escaped: Vec<String> = cells.iter().map(|c| escape_cell(c.as_ref())).collect();
    format!("| {} |", escaped.join(" | "))
}

/// 指定列数のヘッダー区切り行を生成する
///
/// `2` → `| --- | --- |`
pub(crate) fn separator_row(columns: usize) -> String {
    format!("| {} |", vec!["---"; columns].join(" | "))
}
