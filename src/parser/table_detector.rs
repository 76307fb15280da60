//! Text Table Detector
//!
//! PDFから抽出したテキストの中で、列が揃った行の並びを表として検出します。
//!
//! 1行はタブ文字、または2個以上連続する空白で区切られたセルに分割されます。
//! 2セル以上に分割でき、かつセル数が等しい行が2行以上続いた場合に1つの表とみなします。

/// 表とみなすための最小行数
const MIN_TABLE_ROWS: usize = 2;

/// 表の行とみなすための最小セル数
const MIN_TABLE_COLS: usize = 2;

/// テキストから表を検出
///
/// # 戻り値
///
/// 検出された表のリスト（各表は行 × セルのグリッド、先頭行がヘッダー）
pub(crate) fn detect_tables(text: &str) -> Vec<Vec<Vec<String>>> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        match split_row(line) {
            Some(cells) => {
                if run.first().map_or(false, |first| first.len() != cells.len()) {
                    flush_run(&mut run, &mut tables);
                }
                run.push(cells);
            }
            None => flush_run(&mut run, &mut tables),
        }
    }
    flush_run(&mut run, &mut tables);

    tables
}

fn flush_run(run: &mut Vec<Vec<String>>, tables: &mut Vec<Vec<Vec<String>>>) {
    if run.len() >= MIN_TABLE_ROWS {
        tables.push(std::mem::take(run));
    } else {
        run.clear();
    }
}

/// 1行をセルに分割（表の行でなければ`None`）
fn split_row(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut spaces = 0usize;

    for c in line.chars() {
        match c {
            '\t' => {
                spaces = 0;
                push_cell(&mut cells, &mut cell);
            }
            ' ' => spaces += 1,
            _ => {
                if spaces >= 2 {
                    push_cell(&mut cells, &mut cell);
                } else if spaces == 1 && !cell.is_empty() {
                    cell.push(' ');
                }
                spaces = 0;
                cell.push(c);
            }
        }
    }
    push_cell(&mut cells, &mut cell);

    if cells.len() >= MIN_TABLE_COLS {
        Some(cells)
    } else {
        None
    }
}

fn push_cell(cells: &mut Vec<String>, cell: &mut String) {
    if !cell.is_empty() {
        cells.push(std::mem::take(cell));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_split_row() {
        assert_eq!(
            split_row("Name   Age  City"),
            Some(vec!["Name".to_string(), "Age".to_string(), "City".to_string()])
        );
        assert_eq!(
            split_row("a\tb c\t\tc"),
            Some(vec!["a".to_string(), "b c".to_string(), "c".to_string()])
        );
        assert_eq!(split_row("just a sentence"), None);
        assert_eq!(split_row("   "), None);
    }

    #[test]
    fn test_detect_simple_table() {
        let text = "Report\nName   Age\nAlice  30\nBob    25\nThe end.";
        assert_eq!(
            detect_tables(text),
            vec![grid(&[&["Name", "Age"], &["Alice", "30"], &["Bob", "25"]])]
        );
    }

    #[test]
    fn test_single_aligned_line_is_not_a_table() {
        assert!(detect_tables("Total  42\nplain text").is_empty());
    }

    #[test]
    fn test_column_count_change_splits_tables() {
        let text = "A  B\n1  2\nX  Y  Z\n7  8  9";
        assert_eq!(
            detect_tables(text),
            vec![
                grid(&[&["A", "B"], &["1", "2"]]),
                grid(&[&["X", "Y", "Z"], &["7", "8", "9"]]),
            ]
        );
    }

    #[test]
    fn test_blank_line_ends_table() {
        let text = "A\tB\n1\t2\n\nC\tD";
        assert_eq!(detect_tables(text), vec![grid(&[&["A", "B"], &["1", "2"]])]);
    }

    #[test]
    fn test_cjk_cells() {
        let text = "名前  年齢\n太郎  20";
        assert_eq!(
            detect_tables(text),
            vec![grid(&[&["名前", "年齢"], &["太郎", "20"]])]
        );
    }

    #[test]
    fn test_no_text() {
        assert!(detect_tables("").is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_detected_tables_are_rectangular(text in "[a-c \t\n]{0,200}") {
                for table in detect_tables(&text) {
                    prop_assert!(table.len() >= MIN_TABLE_ROWS);
                    let width = table[0].len();
                    prop_assert!(width >= MIN_TABLE_COLS);
                    for row in &table {
                        prop_assert_eq!(row.len(), width);
                        for cell in row {
                            prop_assert!(!cell.is_empty());
                            prop_assert_eq!(cell.trim(), cell.as_str());
                        }
                    }
                }
            }
        }
    }
}
