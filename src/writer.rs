//! Markdown Writer
//!
//! 変換結果を`<出力ディレクトリ>/<入力ファイル名の語幹>.md`へ書き出すモジュール。

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MarkdownifyError, Result};

/// 出力ファイルの拡張子
const OUTPUT_EXTENSION: &str = "md";

/// 書き込み中の一時ファイルの拡張子
const TEMP_EXTENSION: &str = "md.tmp";

/// 入力パスに対応する出力パスを求める
///
/// # 使用例
///
/// ```rust
/// use std::path::Path;
/// use markdownify::output_path_for;
///
/// let path = output_path_for("reports/Q3.docx", "out").unwrap();
/// assert_eq!(path, Path::new("out/Q3.md"));
/// ```
///
/// # 発生し得るエラー
///
/// * `MarkdownifyError::UnsupportedFormat` - 入力パスにファイル名がない場合
pub fn output_path_for<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output_dir: Q) -> Result<PathBuf> {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .ok_or_else(|| MarkdownifyError::UnsupportedFormat {
            extension: input
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default(),
        })?;

    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);
    Ok(output_dir.as_ref().join(file_name))
}

/// Markdown文字列を原子的に書き出す
///
/// 一時ファイル（`<語幹>.md.tmp`）へ書き込んでから目的のパスへリネームします。
/// 既存のファイルは置き換えられます。失敗した場合、一時ファイルは削除されます。
///
/// # 発生し得るエラー
///
/// * `MarkdownifyError::Io` - 出力ディレクトリが存在しない、または書き込みに失敗した場合
pub(crate) fn write_markdown(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(MarkdownifyError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", dir.display()),
        )));
    }

    let temp_path = path.with_extension(TEMP_EXTENSION);
    let result = write_temp(&temp_path, content).and_then(|()| fs::rename(&temp_path, path));

    if let Err(e) = result {
        // 一時ファイルの削除失敗は元のエラーを優先
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn write_temp(temp_path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
