//! CSV出力
//!
//! 真偽値は `TRUE` / 空欄でエンコードする（`FALSE` や `0` は書かない）。
//! 出力先はダウンロード用のバイト列か、選択フォルダ内の `audios.csv`。

use crate::error::{Error, Result};
use crate::types::LabelTable;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// 出力ファイル名（固定）
pub const CSV_NAME: &str = "audios.csv";

/// ダウンロード時のMIMEタイプ
pub const CSV_MIME: &str = "text/csv";

/// 列名
pub const FILENAME_COLUMN: &str = "filename";
pub const GOOD_COLUMN: &str = "file good or bad";

const GOOD_TOKEN: &str = "TRUE";

#[derive(Serialize)]
struct CsvRecord<'a> {
    #[serde(rename = "filename")]
    filename: &'a str,
    #[serde(rename = "file good or bad")]
    good: &'static str,
}

/// 真偽値のエンコード
pub fn encode_flag(is_good: bool) -> &'static str {
    if is_good {
        GOOD_TOKEN
    } else {
        ""
    }
}

/// ラベル表をCSVテキストに変換（表は変更しない）
pub fn encode_csv(table: &LabelTable) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // 0行でもヘッダは出す
    writer.write_record([FILENAME_COLUMN, GOOD_COLUMN])?;
    for row in table.rows() {
        writer.serialize(CsvRecord {
            filename: &row.filename,
            good: encode_flag(row.is_good),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))?;
    String::from_utf8(bytes).map_err(|err| {
        Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

/// ダウンロード用のCSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl CsvDownload {
    pub fn from_table(table: &LabelTable) -> Result<Self> {
        let text = encode_csv(table)?;
        Ok(Self {
            file_name: CSV_NAME,
            mime: CSV_MIME,
            bytes: text.into_bytes(),
        })
    }

    /// 任意の場所に書き出す（保存ダイアログ・`--output`用）
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes).map_err(|source| Error::IoFailure {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 選択フォルダに `audios.csv` として保存（既存ファイルは上書き）
pub fn save_csv_to_folder(csv_text: &str, folder: &Path) -> Result<PathBuf> {
    let out = folder.join(CSV_NAME);
    std::fs::write(&out, csv_text).map_err(|source| Error::IoFailure {
        path: out.clone(),
        source,
    })?;
    info!("saved {}", out.display());
    Ok(out)
}
