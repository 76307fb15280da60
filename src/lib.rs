//! markdownify - Word / PDF / Excel to Markdown converter
//!
//! This crate converts office documents into Markdown text. The input format is
//! chosen from the file extension, and exactly one converter handles each file:
//!
//! | Extension         | Output                                                  |
//! | ----------------- | ------------------------------------------------------- |
//! | `.docx`           | Paragraphs as headings or text lines, then pipe tables  |
//! | `.pdf`            | Per-page extracted text, then detected tables            |
//! | `.xlsx` / `.xls`  | One heading and one pipe table per sheet                 |
//!
//! The result is written to `<output_dir>/<input stem>.md`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Convert with default settings
//!     let written = markdownify::convert("report.docx", "out")?;
//!     println!("{}", written.display());
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use markdownify::{ConverterBuilder, HeadingStylePolicy};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_heading_policy(HeadingStylePolicy::Lenient) // malformed heading styles become text
//!         .with_pdf_table_detection(false) // PDF text only
//!         .build()?;
//!
//!     converter.convert("scan.pdf", "out")?;
//!     Ok(())
//! }
//! ```
//!
//! # Convert to String
//!
//! ```rust,no_run
//! use markdownify::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Convert to String instead of writing to a file
//!     let markdown = converter.convert_to_string("budget.xlsx")?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod convert;
mod error;
mod formatter;
mod grid;
mod markdown;
mod parser;
mod security;
mod types;
mod writer;

use std::path::{Path, PathBuf};

// 公開API
pub use api::{HeadingStylePolicy, SourceFormat};
pub use builder::{Converter, ConverterBuilder};
pub use convert::{classify_heading_style, heading_level, HeadingStyle};
pub use error::{MarkdownifyError, Result};
pub use markdown::MarkdownDocument;
pub use writer::output_path_for;

/// デフォルト設定でファイルを変換し、書き出したパスを返す
///
/// `ConverterBuilder::new().build()?.convert(input, output_dir)`と同じです。
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output_dir: Q) -> Result<PathBuf> {
    ConverterBuilder::new().build()?.convert(input, output_dir)
}
