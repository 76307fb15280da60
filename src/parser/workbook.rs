//! Workbook Parser
//!
//! calamineを使用したExcelファイル（`.xlsx` / `.xls`）の解析。
//! シートを宣言順に読み込み、セル値をフォーマット済み文字列のグリッドに変換します。

use calamine::{open_workbook_auto_from_rs, Reader, Sheets};
use std::io::{Read, Seek};

use crate::error::Result;
use crate::formatter::CellFormatter;
use crate::types::{Sheet, Workbook};

/// ワークブックパーサー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
pub(crate) struct WorkbookParser<R: Read + Seek> {
    /// calamineのワークブック（形式は自動判定）
    workbook: Sheets<R>,
    formatter: CellFormatter,
}

impl<R: Read + Seek + Clone> WorkbookParser<R> {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - Excelファイルを読み込むためのリーダー
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(MarkdownifyError::Spreadsheet)` - ワークブックとして読み込めない場合
    pub fn open(reader: R) -> Result<Self> {
        let workbook = open_workbook_auto_from_rs(reader)?;
        Ok(Self {
            workbook,
            formatter: CellFormatter::new(),
        })
    }

    /// すべてのシート名を宣言順に取得
    pub fn get_sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シートを解析し、フォーマット済みセル文字列のグリッドを返す
    ///
    /// 使用範囲の先頭行がヘッダーになります。空のシートは行を持ちません。
    pub fn parse_sheet(&mut self, sheet_name: &str) -> Result<Sheet> {
        let range = self.workbook.worksheet_range(sheet_name)?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell| self.formatter.format_cell(cell)).collect())
            .collect();

        log::debug!(
            "excel: sheet '{}' {}x{}",
            sheet_name,
            range.height(),
            range.width()
        );

        Ok(Sheet {
            name: sheet_name.to_string(),
            rows,
        })
    }

    /// すべてのシートを解析
    pub fn parse(&mut self) -> Result<Workbook> {
        let sheets = self
            .get_sheet_names()
            .iter()
            .map(|name| self.parse_sheet(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Workbook { sheets })
    }
}

/// Excelファイルのバイト列を解析
pub(crate) fn parse_workbook(data: &[u8]) -> Result<Workbook> {
    WorkbookParser::open(std::io::Cursor::new(data))?.parse()
}
