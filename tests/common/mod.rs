//! テスト用フィクスチャ生成
//!
//! すべてメモリ上で生成します。Excelは`rust_xlsxwriter`、Wordは`zip`と
//! WordprocessingML、PDFは`lopdf`（`pdf_fixture.rs`）を使います。

#![allow(dead_code)]

mod pdf_fixture;

pub use pdf_fixture::pdf;

use std::io::{Cursor, Write};

use rust_xlsxwriter::{Workbook, XlsxError};
use zip::write::{FileOptions, ZipWriter};

const W_NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

/// Wordが保存する形式の組み込みスタイル定義（表示名は小文字）
pub const DEFAULT_STYLES: &str = r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/><w:basedOn w:val="Normal"/></w:style>
<w:style w:type="paragraph" w:styleId="HeadingBad"><w:name w:val="Heading Custom"/></w:style>
<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/></w:style>"#;

/// `.xlsx`ブックをメモリ上で生成
pub fn xlsx(build: impl FnOnce(&mut Workbook) -> Result<(), XlsxError>) -> Vec<u8> {
    let mut workbook = Workbook::new();
    build(&mut workbook).unwrap();
    workbook.save_to_buffer().unwrap()
}

/// 本文の段落（スタイルIDは省略可能）
pub fn paragraph(text: &str, style_id: Option<&str>) -> String {
    let properties = style_id
        .map(|id| format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id))
        .unwrap_or_default();
    format!(
        r#"<w:p>{}<w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        properties,
        escape_xml(text)
    )
}

/// セルごとに1段落を持つ、列数宣言付きの単純な表
pub fn table(rows: &[&[&str]]) -> String {
    let columns = rows.first().map(|r| r.len()).unwrap_or(0);
    let grid: String = (0..columns).map(|_| "<w:gridCol/>").collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<w:tc>{}</w:tc>", paragraph(cell, None)))
                .collect();
            format!("<w:tr>{}</w:tr>", cells)
        })
        .collect();
    format!("<w:tbl><w:tblGrid>{}</w:tblGrid>{}</w:tbl>", grid, body)
}

/// 本文XMLとスタイル定義（省略可能）から`.docx`を生成
pub fn docx(body: &str, styles: Option<&str>) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {}><w:body>{}<w:sectPr/></w:body></w:document>"#,
        W_NS, body
    );

    let mut entries = vec![
        ("[Content_Types].xml".to_string(), CONTENT_TYPES.to_string()),
        ("word/document.xml".to_string(), document),
    ];
    if let Some(styles) = styles {
        entries.push((
            "word/styles.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles {}>{}</w:styles>"#,
                W_NS, styles
            ),
        ));
    }

    zip_archive(
        entries
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_bytes()))
            .collect(),
    )
}

/// エントリの列からZIPアーカイブを生成
pub fn zip_archive(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();
    for (name, content) in entries {
        zip.start_file(name, options).unwrap();
        zip.write_all(content).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
