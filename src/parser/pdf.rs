//! PDF Parser
//!
//! `lopdf`でPDFを読み込み、ページ順にテキストと表を抽出します。

use lopdf::Document;

use crate::error::Result;
use crate::parser::table_detector::detect_tables;
use crate::types::{PdfDocument, PdfPage};

/// PDFパーサー
pub(crate) struct PdfParser {
    doc: Document,
    detect_tables: bool,
}

impl PdfParser {
    /// バイト列からPDFを読み込む
    ///
    /// # 戻り値
    ///
    /// * `Ok(PdfParser)` - 読み込みに成功した場合
    /// * `Err(MarkdownifyError::Pdf)` - PDFとして読み込めない場合
    pub fn from_bytes(data: &[u8], detect_tables: bool) -> Result<Self> {
        let doc = Document::load_mem(data)?;
        if doc.is_encrypted() {
            log::warn!("pdf: document is encrypted, text extraction may be empty");
        }
        Ok(Self { doc, detect_tables })
    }

    /// 全ページを解析
    pub fn parse(&self) -> PdfDocument {
        let pages = self.doc.get_pages();
        log::debug!("pdf: {} pages", pages.len());

        // get_pages()はページ番号順のBTreeMap
        let pages = pages
            .keys()
            .map(|&page_num| self.parse_page(page_num))
            .collect();

        PdfDocument { pages }
    }

    fn parse_page(&self, page_num: u32) -> PdfPage {
        let text = match self.doc.extract_text(&[page_num]) {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("pdf: failed to extract text from page {}: {}", page_num, e);
                None
            }
        };

        let tables = match (&text, self.detect_tables) {
            (Some(text), true) => detect_tables(text),
            _ => Vec::new(),
        };

        PdfPage { text, tables }
    }
}

/// PDFのバイト列を解析
pub(crate) fn parse_pdf(data: &[u8], detect_tables: bool) -> Result<PdfDocument> {
    Ok(PdfParser::from_bytes(data, detect_tables)?.parse())
}

#[cfg(test)]
#[path = "../../tests/common/pdf_fixture.rs"]
mod pdf_fixture;
