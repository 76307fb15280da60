//! Internal Types Module
//!
//! 各パーサーが生成し、各変換器が消費する内部データモデルを定義するモジュール。
//! 変換器はファイルシステムに触れず、これらの構造体だけを入力とします。

/// 解析済みのWord文書
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct WordDocument {
    /// 本文直下の段落（文書順）
    pub paragraphs: Vec<Paragraph>,

    /// 本文直下の表（文書順）
    pub tables: Vec<WordTable>,
}

/// Word文書の段落
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Paragraph {
    /// 段落のテキスト（空文字列を含む）
    pub text: String,

    /// スタイルの表示名（例: `Heading 2`, `Normal`）
    pub style_name: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_name: style_name.into(),
        }
    }
}

/// Word文書の表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct WordTable {
    /// 行 × セルテキスト
    pub rows: Vec<Vec<String>>,

    /// 表グリッドで宣言された列数
    ///
    /// 実際の行のセル数とは一致しない場合があります（不規則な表）。
    pub column_count: usize,
}

impl WordTable {
    pub fn new(rows: Vec<Vec<String>>, column_count: usize) -> Self {
        Self { rows, column_count }
    }
}

/// 解析済みのPDF文書
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PdfDocument {
    /// ページ（ページ番号順）
    pub pages: Vec<PdfPage>,
}

/// PDFの1ページ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PdfPage {
    /// 抽出テキスト（抽出できなかった場合は`None`）
    pub text: Option<String>,

    /// 検出された表（先頭行がヘッダー）
    pub tables: Vec<Vec<Vec<String>>>,
}

/// 解析済みのExcelワークブック
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Workbook {
    /// シート（宣言順）
    pub sheets: Vec<Sheet>,
}

/// Excelのシート
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sheet {
    /// シート名
    pub name: String,

    /// フォーマット済みセル文字列のグリッド（先頭行がヘッダー）
    pub rows: Vec<Vec<String>>,
}
