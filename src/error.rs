//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// markdownifyクレート全体で使用するエラー型
///
/// 入力形式の判定、各形式（Word / PDF / Excel）の解析、Markdownの書き出し中に
/// 発生するすべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `UnsupportedFormat`: 拡張子が `.docx` / `.pdf` / `.xlsx` / `.xls` 以外
/// - `MalformedHeadingStyle`: `Heading` で始まるが見出しレベルを解析できないスタイル名
/// - `Io` ほか解析系: 入出力の失敗、または入力ファイルの破損
///   （[`MarkdownifyError::is_io_failure`] でまとめて判定できます）
///
/// # 使用例
///
/// ```rust,no_run
/// use markdownify::MarkdownifyError;
///
/// match markdownify::convert("notes.txt", "out") {
///     Err(MarkdownifyError::UnsupportedFormat { extension }) => {
///         eprintln!("unsupported: {}", extension);
///     }
///     Err(e) => eprintln!("{}", e),
///     Ok(path) => println!("{}", path.display()),
/// }
/// ```
#[derive(Error, Debug)]
pub enum MarkdownifyError {
    /// サポートされていない入力形式
    ///
    /// 出力ファイルは作成されません。拡張子がない場合は空文字列になります。
    #[error("Unsupported file format: '{extension}'")]
    UnsupportedFormat {
        /// 小文字化された拡張子（先頭の`.`付き）
        extension: String,
    },

    /// 見出しレベルを解析できないスタイル名
    ///
    /// `HeadingStylePolicy::Strict`の場合にのみ返されます。
    #[error("Malformed heading style: '{style}'")]
    MalformedHeadingStyle {
        /// 段落に適用されていたスタイル名
        style: String,
    },

    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー（calamine由来）
    #[error("Failed to parse spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// PDFファイルの解析中に発生したエラー（lopdf由来）
    #[error("Failed to parse PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    /// ZIPアーカイブの解析エラー
    ///
    /// DOCXファイル（ZIPアーカイブ）の解析中に発生したエラーです。
    #[error("ZIP archive error: {0}")]
    Zip(String),

    /// XMLの解析エラー
    #[error("XML parse error: {0}")]
    Xml(String),

    /// 必須のパーツがアーカイブ内に存在しない
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// UTF-8文字列の変換エラー
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// ZIP bomb攻撃、パストラバーサル攻撃、ファイルサイズ制限などの
    /// セキュリティ制限に違反した場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}

impl MarkdownifyError {
    /// 入出力の失敗、または入力ファイルの破損に分類されるエラーかどうか
    ///
    /// 出力ディレクトリが存在しない・書き込めない場合と、パーサーが入力を
    /// 読めなかった場合の両方を含みます。
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            MarkdownifyError::Io(_)
                | MarkdownifyError::Spreadsheet(_)
                | MarkdownifyError::Pdf(_)
                | MarkdownifyError::Zip(_)
                | MarkdownifyError::Xml(_)
                | MarkdownifyError::MissingPart(_)
                | MarkdownifyError::Utf8(_)
                | MarkdownifyError::SecurityViolation(_)
        )
    }
}

impl From<zip::result::ZipError> for MarkdownifyError {
    fn from(err: zip::result::ZipError) -> Self {
        MarkdownifyError::Zip(err.to_string())
    }
}

impl From<quick_xml::Error> for MarkdownifyError {
    fn from(err: quick_xml::Error) -> Self {
        MarkdownifyError::Xml(err.to_string())
    }
}

/// クレート内で使用する`Result`型エイリアス
pub type Result<T> = std::result::Result<T, MarkdownifyError>;
