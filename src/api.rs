//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use std::path::Path;

use crate::error::{MarkdownifyError, Result};

/// 入力ファイルの形式
///
/// 拡張子（大文字小文字を区別しない）から決定され、変換器をちょうど1つ選択します。
///
/// | 拡張子            | 形式    |
/// | ----------------- | ------- |
/// | `.docx`           | `Word`  |
/// | `.pdf`            | `Pdf`   |
/// | `.xlsx` / `.xls`  | `Excel` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Word文書（`.docx`）
    Word,
    /// PDF文書（`.pdf`）
    Pdf,
    /// Excelワークブック（`.xlsx` / `.xls`）
    Excel,
}

impl SourceFormat {
    /// 拡張子から形式を判定する
    ///
    /// 先頭の`.`の有無は問いません。
    ///
    /// # 戻り値
    ///
    /// * `Ok(SourceFormat)` - 対応する形式
    /// * `Err(MarkdownifyError::UnsupportedFormat)` - 未対応の拡張子
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use markdownify::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_extension(".XLS").unwrap(), SourceFormat::Excel);
    /// assert!(SourceFormat::from_extension("txt").is_err());
    /// ```
    pub fn from_extension(extension: &str) -> Result<Self> {
        let normalized = extension.trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "docx" => Ok(SourceFormat::Word),
            "pdf" => Ok(SourceFormat::Pdf),
            "xlsx" | "xls" => Ok(SourceFormat::Excel),
            _ => Err(MarkdownifyError::UnsupportedFormat {
                extension: if normalized.is_empty() {
                    String::new()
                } else {
                    format!(".{}", normalized)
                },
            }),
        }
    }

    /// ファイルパスの拡張子から形式を判定する
    ///
    /// 拡張子がないパスは`UnsupportedFormat`になります。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }

    /// 形式の表示名
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Word => "Word",
            SourceFormat::Pdf => "PDF",
            SourceFormat::Excel => "Excel",
        }
    }
}

/// 見出しスタイル名が不正な場合の処理方針
///
/// `Heading`で始まるのに、最初の空白の後ろに整数レベルがないスタイル名
/// （例: `Heading`、`Heading Custom`）をどう扱うかを指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum HeadingStylePolicy {
    /// 変換全体を`MalformedHeadingStyle`エラーで中断する（デフォルト）
    #[default]
    Strict,

    /// 見出しではない通常の段落として本文をそのまま出力する
    ///
    /// 警告ログを出力します。
    Lenient,
}
