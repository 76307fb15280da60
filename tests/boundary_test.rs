//! Boundary Tests for markdownify
//!
//! Edge cases around dispatch, empty inputs, the output directory and
//! repeated conversions.

mod common;

use std::fs;

use markdownify::{output_path_for, ConverterBuilder, MarkdownifyError, SourceFormat};
use tempfile::TempDir;

use common::{docx, paragraph, pdf, table, xlsx};

#[test]
fn test_unsupported_extension_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "plain text").unwrap();

    let result = markdownify::convert(&input, dir.path());

    match result {
        Err(MarkdownifyError::UnsupportedFormat { extension }) => assert_eq!(extension, ".txt"),
        other => panic!("Expected UnsupportedFormat, got {:?}", other),
    }
    assert!(!dir.path().join("notes.md").exists());
}

#[test]
fn test_unsupported_extension_is_checked_before_reading() {
    // 存在しないファイルでも拡張子の判定が先に行われる
    let dir = TempDir::new().unwrap();
    let result = markdownify::convert(dir.path().join("missing.doc"), dir.path());
    assert!(matches!(result, Err(MarkdownifyError::UnsupportedFormat { .. })));
}

#[test]
fn test_missing_input_file_is_io_failure() {
    let dir = TempDir::new().unwrap();
    let err = markdownify::convert(dir.path().join("missing.pdf"), dir.path()).unwrap_err();
    assert!(matches!(err, MarkdownifyError::Io(_)));
    assert!(err.is_io_failure());
}

#[test]
fn test_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("a.docx");
    fs::write(&input, docx(&paragraph("text", None), None)).unwrap();
    let output_dir = dir.path().join("does-not-exist");

    let err = markdownify::convert(&input, &output_dir).unwrap_err();

    match err {
        MarkdownifyError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {:?}", other),
    }
    assert!(!output_dir.exists());
}

#[test]
fn test_corrupt_inputs_are_io_failures() {
    let converter = ConverterBuilder::new().build().unwrap();
    for format in [SourceFormat::Word, SourceFormat::Pdf, SourceFormat::Excel] {
        let err = converter.convert_bytes(format, b"").unwrap_err();
        assert!(err.is_io_failure(), "{:?} should be an IO failure", err);
    }
}

#[test]
fn test_corrupt_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.xlsx");
    fs::write(&input, b"definitely not a workbook").unwrap();

    assert!(markdownify::convert(&input, dir.path()).is_err());
    assert!(!dir.path().join("broken.md").exists());
    assert!(!dir.path().join("broken.md.tmp").exists());
}

#[test]
fn test_empty_word_document() {
    let converter = ConverterBuilder::new().build().unwrap();
    let markdown = converter
        .convert_bytes(SourceFormat::Word, &docx("", None))
        .unwrap();

    assert!(markdown.is_empty());
    assert_eq!(markdown.render(), "");
}

#[test]
fn test_empty_paragraphs_are_kept() {
    let body = [
        paragraph("first", None),
        "<w:p/>".to_string(),
        paragraph("second", None),
    ]
    .concat();
    let converter = ConverterBuilder::new().build().unwrap();

    let markdown = converter
        .convert_bytes(SourceFormat::Word, &docx(&body, None))
        .unwrap();

    assert_eq!(markdown.render(), "first\n\nsecond");
}

#[test]
fn test_word_table_with_header_only() {
    let converter = ConverterBuilder::new().build().unwrap();
    let markdown = converter
        .convert_bytes(SourceFormat::Word, &docx(&table(&[&["Only"]]), None))
        .unwrap();

    assert_eq!(
        markdown.blocks(),
        ["\n", "### 表格提取\n", "| Only |", "| --- |"]
    );
}

#[test]
fn test_empty_excel_sheet() {
    let data = xlsx(|wb| {
        wb.add_worksheet().set_name("Empty")?;
        Ok(())
    });
    let converter = ConverterBuilder::new().build().unwrap();

    let markdown = converter.convert_bytes(SourceFormat::Excel, &data).unwrap();

    assert_eq!(markdown.render(), "## Excel 表格转换\n\n### 工作表: Empty\n\n");
}

#[test]
fn test_excel_ragged_rows_are_padded() {
    let data = xlsx(|wb| {
        let ws = wb.add_worksheet();
        ws.write_string(0, 0, "A")?;
        ws.write_string(1, 0, "1")?;
        ws.write_string(1, 1, "2")?;
        Ok(())
    });
    let converter = ConverterBuilder::new().build().unwrap();

    let rendered = converter
        .convert_bytes(SourceFormat::Excel, &data)
        .unwrap()
        .render();

    assert!(rendered.contains("| A   |     |\n|-----|-----|\n| 1   | 2   |"));
}

#[test]
fn test_pdf_without_pages_content() {
    let converter = ConverterBuilder::new().build().unwrap();
    let markdown = converter
        .convert_bytes(SourceFormat::Pdf, &pdf(&[&[]]))
        .unwrap();

    assert_eq!(markdown.len(), 2);
    assert_eq!(markdown.blocks()[0], "## PDF 内容提取\n");
}

#[test]
fn test_repeated_conversion_is_identical() {
    let data = xlsx(|wb| {
        let ws = wb.add_worksheet();
        ws.write_string(0, 0, "名前")?;
        ws.write_string(1, 0, "太郎")?;
        Ok(())
    });
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.xlsx");
    fs::write(&input, data).unwrap();

    let first = markdownify::convert(&input, dir.path()).unwrap();
    let first_bytes = fs::read(&first).unwrap();
    let second = markdownify::convert(&input, dir.path()).unwrap();
    let second_bytes = fs::read(&second).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("memo.docx");
    fs::write(&input, docx(&paragraph("fresh", None), None)).unwrap();
    fs::write(dir.path().join("memo.md"), "stale content").unwrap();

    let written = markdownify::convert(&input, dir.path()).unwrap();

    assert_eq!(fs::read_to_string(written).unwrap(), "fresh");
}

#[test]
fn test_output_path_for_keeps_inner_dots() {
    assert_eq!(
        output_path_for("2024.final.report.pdf", "out").unwrap(),
        std::path::Path::new("out").join("2024.final.report.md")
    );
}

#[test]
fn test_zero_max_input_size_is_rejected() {
    let result = ConverterBuilder::new().with_max_input_size(0).build();
    assert!(matches!(result, Err(MarkdownifyError::Config(_))));
}
