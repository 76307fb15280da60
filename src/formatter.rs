//! Formatter Module
//!
//! Excelセル値（`calamine::Data`）を表に載せる文字列へ変換するモジュール。

use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// 1日の秒数
const SECONDS_PER_DAY: f64 = 86_400.0;

/// セルフォーマッター
///
/// セル値のフォーマット処理のファサードとして機能します。
#[derive(Debug, Default)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,

    /// 数値フォーマッター
    number_formatter: NumberFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// セル値をフォーマット
    ///
    /// | 値              | 出力                                        |
    /// | --------------- | ------------------------------------------- |
    /// | 文字列          | そのまま                                    |
    /// | 整数・小数      | 最短の10進表記（`1.0` → `1`）               |
    /// | 真偽値          | `True` / `False`                            |
    /// | 日付時刻        | `YYYY-MM-DD`（時刻部分があれば` HH:MM:SS`） |
    /// | エラー          | Excelのエラーコード（`#DIV/0!`など）        |
    /// | 空              | 空文字列                                    |
    ///
    /// Markdownのエスケープは表の描画時に行うため、ここでは行いません。
    pub fn format_cell(&self, cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => self.number_formatter.format(*f),
            Data::Bool(b) => if *b { "True" } else { "False" }.to_string(),
            Data::DateTime(dt) => {
                let serial = dt.as_f64();
                if dt.is_duration() {
                    return self.number_formatter.format(serial);
                }
                self.date_formatter
                    .format(serial)
                    .unwrap_or_else(|| self.number_formatter.format(serial))
            }
            Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
            Data::Error(e) => e.to_string(),
            Data::Empty => String::new(),
        }
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値（1900年システム、1899年12月30日起算）を文字列に変換します。
#[derive(Debug, Default)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// シリアル値をフォーマット
    ///
    /// # 戻り値
    ///
    /// * `Some(String)` - `YYYY-MM-DD`、または時刻部分があれば`YYYY-MM-DD HH:MM:SS`
    /// * `None` - 日付として表現できない値（負数・範囲外）
    ///
    /// # エポック
    ///
    /// Excelは1900年をうるう年として扱うため、シリアル値60（1900-02-29）より前は
    /// 1日ずれます。シリアル値1が1900-01-01になるよう補正します。
    pub fn format(&self, serial_value: f64) -> Option<String> {
        if !serial_value.is_finite() || serial_value < 0.0 {
            return None;
        }

        let mut days = serial_value.floor() as i64;
        let mut seconds = ((serial_value - serial_value.floor()) * SECONDS_PER_DAY).round() as i64;
        if seconds >= SECONDS_PER_DAY as i64 {
            days += 1;
            seconds = 0;
        }
        if days < 61 {
            days += 1;
        }

        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
        let datetime: NaiveDateTime = epoch
            .checked_add_signed(Duration::try_days(days)?)?
            .checked_add_signed(Duration::try_seconds(seconds)?)?;

        if seconds == 0 {
            Some(datetime.format("%Y-%m-%d").to_string())
        } else {
            Some(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
        }
    }
}

/// 数値フォーマッター
///
/// 往復可能な最短の10進表記で出力します（整数値の小数点以下は付けません）。
#[derive(Debug, Default)]
pub(crate) struct NumberFormatter;

impl NumberFormatter {
    /// 数値をフォーマット
    pub fn format(&self, value: f64) -> String {
        if value == 0.0 {
            // -0.0も"0"にする
            return "0".to_string();
        }
        value.to_string()
    }
}
