//! Word Document Parser
//!
//! DOCXファイル（ZIPアーカイブ）内の`word/document.xml`を`quick-xml`で走査し、
//! 本文直下の段落と表を抽出します。

use std::io::{Cursor, Read, Seek};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{MarkdownifyError, Result};
use crate::parser::styles::{attr_value, StyleMap};
use crate::security::SecurityConfig;
use crate::types::{Paragraph, WordDocument, WordTable};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";

/// DOCXファイルを解析
///
/// # 引数
///
/// * `data` - DOCXファイルのバイト列
/// * `security` - セキュリティ設定
///
/// # 戻り値
///
/// * `Ok(WordDocument)` - 解析に成功した場合
/// * `Err(MarkdownifyError)` - ZIP/XMLの解析エラー、または必須パーツがない場合
pub(crate) fn parse_docx(data: &[u8], security: &SecurityConfig) -> Result<WordDocument> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    security.check_archive(&mut archive)?;

    // 展開済みバイト数の累計
    let mut decompressed = 0u64;

    // スタイルパーツは省略可能
    let styles = match read_part(&mut archive, STYLES_PART, security, &mut decompressed)? {
        Some(xml) => StyleMap::parse(&xml)?,
        None => StyleMap::default(),
    };

    let document_xml = read_part(&mut archive, DOCUMENT_PART, security, &mut decompressed)?
        .ok_or_else(|| MarkdownifyError::MissingPart(DOCUMENT_PART.to_string()))?;

    parse_document_xml(&document_xml, &styles)
}

/// アーカイブからパーツを読み込む（存在しない場合は`None`）
fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
    security: &SecurityConfig,
    decompressed: &mut u64,
) -> Result<Option<String>> {
    let file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let bytes = security.read_entry(file, name, decompressed)?;
    let xml = std::str::from_utf8(&bytes)?;
    // BOM付きのパーツもある
    Ok(Some(xml.trim_start_matches('\u{feff}').to_string()))
}

/// 段落の出力先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParagraphTarget {
    Body,
    Cell,
}

/// 構築中の段落
#[derive(Debug)]
struct ParagraphBuilder {
    target: ParagraphTarget,
    text: String,
    style_id: Option<String>,
    /// 内側（テキストボックスなど）で開かれた段落の数
    nested: usize,
    in_text: bool,
}

impl ParagraphBuilder {
    fn new(target: ParagraphTarget) -> Self {
        Self {
            target,
            text: String::new(),
            style_id: None,
            nested: 0,
            in_text: false,
        }
    }

    /// この段落自身のランに属する位置かどうか
    fn is_direct(&self) -> bool {
        self.nested == 0
    }
}

/// 構築中のセル
#[derive(Debug, Default)]
struct CellBuilder {
    paragraphs: Vec<String>,
    span: usize,
    /// 縦結合の継続セル（上のセルのテキストを繰り返す）
    merge_continue: bool,
}

/// 構築中の表（本文直下の表のみ）
#[derive(Debug, Default)]
struct TableBuilder {
    rows: Vec<Vec<String>>,
    grid_cols: usize,
    row: Option<Vec<String>>,
    cell: Option<CellBuilder>,
}

impl TableBuilder {
    fn finish_cell(&mut self) {
        let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) else {
            return;
        };

        let grid_col = row.len();
        let text = if cell.merge_continue {
            self.rows
                .last()
                .and_then(|above| above.get(grid_col))
                .cloned()
                .unwrap_or_default()
        } else {
            cell.paragraphs.join("\n")
        };

        for _ in 0..cell.span.max(1) {
            row.push(text.clone());
        }
    }

    fn finish(self) -> WordTable {
        let column_count = if self.grid_cols > 0 {
            self.grid_cols
        } else {
            self.rows.first().map(Vec::len).unwrap_or(0)
        };
        WordTable::new(self.rows, column_count)
    }
}

/// `word/document.xml`の走査状態
struct DocumentWalker<'a> {
    styles: &'a StyleMap,
    /// 開いている要素のローカル名
    stack: Vec<Vec<u8>>,
    /// 表のネスト深さ
    table_depth: usize,
    paragraph: Option<ParagraphBuilder>,
    table: Option<TableBuilder>,
    document: WordDocument,
}

impl<'a> DocumentWalker<'a> {
    fn new(styles: &'a StyleMap) -> Self {
        Self {
            styles,
            stack: Vec::new(),
            table_depth: 0,
            paragraph: None,
            table: None,
            document: WordDocument::default(),
        }
    }

    fn parent(&self) -> &[u8] {
        self.stack.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// 本文直下の表のセル内にいるかどうか
    fn in_top_level_cell(&self) -> bool {
        self.table_depth == 1
            && self
                .table
                .as_ref()
                .map(|t| t.cell.is_some())
                .unwrap_or(false)
    }

    fn start(&mut self, e: &BytesStart, empty: bool) {
        let name = e.local_name().as_ref().to_vec();

        match name.as_slice() {
            b"tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 && self.parent() == b"body" {
                    self.table = Some(TableBuilder::default());
                }
            }
            b"gridCol" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.grid_cols += 1;
                }
            }
            b"tr" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.row = Some(Vec::new());
                }
            }
            b"tc" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.cell = Some(CellBuilder {
                        span: 1,
                        ..CellBuilder::default()
                    });
                }
            }
            b"gridSpan" if self.in_top_level_cell() => {
                let span = attr_value(e, b"val").and_then(|v| v.parse::<usize>().ok());
                if let Some(cell) = self.table.as_mut().and_then(|t| t.cell.as_mut()) {
                    cell.span = span.unwrap_or(1).max(1);
                }
            }
            b"vMerge" if self.in_top_level_cell() => {
                let restart = attr_value(e, b"val").as_deref() == Some("restart");
                if let Some(cell) = self.table.as_mut().and_then(|t| t.cell.as_mut()) {
                    cell.merge_continue = !restart;
                }
            }
            b"p" => self.start_paragraph(),
            b"pStyle" if self.parent() == b"pPr" => {
                if let Some(paragraph) = self.paragraph.as_mut().filter(|p| p.is_direct()) {
                    paragraph.style_id = attr_value(e, b"val");
                }
            }
            b"t" if self.parent() == b"r" => {
                if let Some(paragraph) = self.paragraph.as_mut().filter(|p| p.is_direct()) {
                    paragraph.in_text = !empty;
                }
            }
            b"tab" if self.parent() == b"r" => self.push_text("\t"),
            b"br" if self.parent() == b"r" => {
                let break_type = attr_value(e, b"type");
                if !matches!(break_type.as_deref(), Some("page") | Some("column")) {
                    self.push_text("\n");
                }
            }
            b"cr" if self.parent() == b"r" => self.push_text("\n"),
            b"noBreakHyphen" if self.parent() == b"r" => self.push_text("-"),
            _ => {}
        }

        self.stack.push(name);
        if empty {
            self.end();
        }
    }

    fn start_paragraph(&mut self) {
        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.nested += 1;
            return;
        }

        if self.table_depth == 0 && self.parent() == b"body" {
            self.paragraph = Some(ParagraphBuilder::new(ParagraphTarget::Body));
        } else if self.in_top_level_cell() && self.parent() == b"tc" {
            self.paragraph = Some(ParagraphBuilder::new(ParagraphTarget::Cell));
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(paragraph) = self.paragraph.as_mut().filter(|p| p.is_direct()) {
            paragraph.text.push_str(text);
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(paragraph) = self.paragraph.as_mut() {
            if paragraph.in_text && paragraph.is_direct() {
                paragraph.text.push_str(text);
            }
        }
    }

    fn end(&mut self) {
        let Some(name) = self.stack.pop() else {
            return;
        };

        match name.as_slice() {
            b"t" => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.in_text = false;
                }
            }
            b"p" => self.end_paragraph(),
            b"tc" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    table.finish_cell();
                }
            }
            b"tr" if self.table_depth == 1 => {
                if let Some(table) = self.table.as_mut() {
                    if let Some(row) = table.row.take() {
                        table.rows.push(row);
                    }
                }
            }
            b"tbl" => {
                if self.table_depth == 1 {
                    if let Some(table) = self.table.take() {
                        self.document.tables.push(table.finish());
                    }
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn end_paragraph(&mut self) {
        let Some(paragraph) = self.paragraph.as_mut() else {
            return;
        };
        if paragraph.nested > 0 {
            paragraph.nested -= 1;
            return;
        }

        let Some(paragraph) = self.paragraph.take() else {
            return;
        };
        match paragraph.target {
            ParagraphTarget::Body => {
                let style_name = self.styles.resolve(paragraph.style_id.as_deref());
                self.document
                    .paragraphs
                    .push(Paragraph::new(paragraph.text, style_name));
            }
            ParagraphTarget::Cell => {
                if let Some(cell) = self.table.as_mut().and_then(|t| t.cell.as_mut()) {
                    cell.paragraphs.push(paragraph.text);
                }
            }
        }
    }
}

/// `word/document.xml`の内容から段落と表を抽出
pub(crate) fn parse_document_xml(xml: &str, styles: &StyleMap) -> Result<WordDocument> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut walker = DocumentWalker::new(styles);

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => walker.start(e, false),
            Event::Empty(ref e) => walker.start(e, true),
            Event::End(_) => walker.end(),
            Event::Text(ref e) => {
                let text = e.unescape()?;
                walker.text(&text);
            }
            Event::CData(ref e) => {
                let text = String::from_utf8_lossy(e).into_owned();
                walker.text(&text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    log::debug!(
        "docx: parsed {} paragraphs, {} tables",
        walker.document.paragraphs.len(),
        walker.document.tables.len()
    );

    Ok(walker.document)
}
