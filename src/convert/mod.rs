//! Convert Module
//!
//! 解析済みの入力をMarkdown文書に変換する各形式の規則を提供するモジュール。
//! 形式ごとの規則は互いに独立しており、`ParsedSource`の判別子で1つだけが選ばれます。

mod excel;
mod pdf;
mod word;

pub use word::{classify_heading_style, heading_level, HeadingStyle};

use crate::builder::ConversionConfig;
use crate::error::Result;
use crate::markdown::MarkdownDocument;
use crate::types::{PdfDocument, WordDocument, Workbook};

/// 解析済みの入力（形式ごとのタグ付き共用体）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedSource {
    Word(WordDocument),
    Pdf(PdfDocument),
    Excel(Workbook),
}

impl ParsedSource {
    /// 形式に応じた変換器でMarkdown文書を生成
    pub fn to_markdown(&self, config: &ConversionConfig) -> Result<MarkdownDocument> {
        match self {
            ParsedSource::Word(document) => {
                word::convert_document(document, config.heading_policy)
            }
            ParsedSource::Pdf(document) => pdf::convert_document(document),
            ParsedSource::Excel(workbook) => excel::convert_workbook(workbook),
        }
    }
}
