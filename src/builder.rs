//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use std::fs;
use std::path::{Path, PathBuf};

use crate::api::{HeadingStylePolicy, SourceFormat};
use crate::convert::ParsedSource;
use crate::error::{MarkdownifyError, Result};
use crate::markdown::MarkdownDocument;
use crate::parser;
use crate::security::SecurityConfig;
use crate::writer;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConversionConfig {
    /// 見出しスタイル名が不正な段落の扱い
    pub heading_policy: HeadingStylePolicy,

    /// PDFのテキストから表を検出するか
    pub detect_pdf_tables: bool,

    /// セキュリティ制限
    pub security: SecurityConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            heading_policy: HeadingStylePolicy::Strict,
            detect_pdf_tables: true,
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use markdownify::{ConverterBuilder, HeadingStylePolicy};
///
/// # fn main() -> Result<(), markdownify::MarkdownifyError> {
/// let converter = ConverterBuilder::new()
///     .with_heading_policy(HeadingStylePolicy::Lenient)
///     .with_pdf_table_detection(false)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 見出しスタイル: 不正なスタイル名はエラー（`Strict`）
    /// - PDFの表検出: 有効
    /// - 入力サイズ上限: 2GB
    pub fn new() -> Self {
        Self::default()
    }

    /// 見出しスタイル名が不正な段落の扱いを指定する
    pub fn with_heading_policy(mut self, policy: HeadingStylePolicy) -> Self {
        self.config.heading_policy = policy;
        self
    }

    /// PDFのテキストから表を検出するかを指定する
    ///
    /// 無効にすると、PDFの出力はページごとのテキストのみになります。
    pub fn with_pdf_table_detection(mut self, enabled: bool) -> Self {
        self.config.detect_pdf_tables = enabled;
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `MarkdownifyError::Config(String)`: 入力サイズ上限が0の場合
    pub fn build(self) -> Result<Converter> {
        if self.config.security.max_input_file_size == 0 {
            return Err(MarkdownifyError::Config(
                "Invalid max input size: must be greater than 0".to_string(),
            ));
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// 拡張子で形式を判定し、対応する変換器でMarkdownを生成して書き出します。
///
/// # 使用例
///
/// ```rust,no_run
/// use markdownify::ConverterBuilder;
///
/// # fn main() -> Result<(), markdownify::MarkdownifyError> {
/// let converter = ConverterBuilder::new().build()?;
/// let written = converter.convert("report.docx", "out")?;
/// println!("{}", written.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// ファイルを変換し、出力ディレクトリにMarkdownファイルを書き出す
    ///
    /// # 引数
    ///
    /// * `input` - 入力ファイルのパス（`.docx` / `.pdf` / `.xlsx` / `.xls`）
    /// * `output_dir` - 出力先ディレクトリ（存在している必要があります）
    ///
    /// # 戻り値
    ///
    /// * `Ok(PathBuf)` - 書き出したファイルのパス（`<output_dir>/<語幹>.md`）
    /// * `Err(MarkdownifyError)` - エラーが発生した場合（ファイルは書き出されません）
    ///
    /// # 処理フロー
    ///
    /// 1. 拡張子から形式を判定
    /// 2. 入力ファイルを読み込み、解析
    /// 3. 形式に応じた規則でMarkdown文書を生成
    /// 4. 一時ファイル経由で書き出し
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_dir: Q,
    ) -> Result<PathBuf> {
        let input = input.as_ref();
        let output_path = writer::output_path_for(input, output_dir)?;

        let markdown = self.convert_to_string(input)?;
        writer::write_markdown(&output_path, &markdown)?;

        log::info!("converted {} -> {}", input.display(), output_path.display());
        Ok(output_path)
    }

    /// ファイルを変換し、Markdown文字列を返す（書き出しは行わない）
    pub fn convert_to_string<P: AsRef<Path>>(&self, input: P) -> Result<String> {
        let input = input.as_ref();
        let format = SourceFormat::from_path(input)?;
        log::debug!("dispatch {} as {}", input.display(), format.name());

        // 読み込み前にサイズを検証
        let size = fs::metadata(input)?.len();
        self.config.security.check_input_size(size)?;

        let data = fs::read(input)?;
        Ok(self.convert_bytes(format, &data)?.render())
    }

    /// メモリ上のバイト列を指定の形式として変換する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use markdownify::{ConverterBuilder, SourceFormat};
    ///
    /// # fn main() -> Result<(), markdownify::MarkdownifyError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let data = std::fs::read("report.pdf")?;
    /// let markdown = converter.convert_bytes(SourceFormat::Pdf, &data)?;
    /// println!("{}", markdown.render());
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_bytes(&self, format: SourceFormat, data: &[u8]) -> Result<MarkdownDocument> {
        self.config.security.check_input_size(data.len() as u64)?;

        let source = match format {
            SourceFormat::Word => {
                ParsedSource::Word(parser::parse_docx(data, &self.config.security)?)
            }
            SourceFormat::Pdf => {
                ParsedSource::Pdf(parser::parse_pdf(data, self.config.detect_pdf_tables)?)
            }
            SourceFormat::Excel => ParsedSource::Excel(parser::parse_workbook(data)?),
        };

        let markdown = source.to_markdown(&self.config)?;
        log::debug!("{}: {} blocks", format.name(), markdown.len());
        Ok(markdown)
    }
}
