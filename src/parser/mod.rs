//! Parser Module
//!
//! 入力形式ごとのパーサー。各パーサーはバイト列を受け取り、
//! `types`で定義された内部データモデルを生成します。

mod docx;
mod pdf;
mod styles;
mod table_detector;
mod workbook;

pub(crate) use docx::parse_docx;
pub(crate) use pdf::parse_pdf;
pub(crate) use workbook::parse_workbook;
