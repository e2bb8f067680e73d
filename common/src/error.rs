//! エラー型定義
//!
//! UIに表示する条件（フォルダ不正・該当ファイルなし・プレビュー失敗・保存失敗）を
//! 列挙し、警告かエラーかを区別する。

use std::path::PathBuf;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("That path doesn't exist or isn't a folder: {0}")]
    NotAFolder(String),

    #[error("No .{extension} files found in that folder: {folder}")]
    NoMatchingFiles { folder: String, extension: String },

    #[error("Please choose a folder first.")]
    NoFolderSelected,

    #[error("Could not play audio {file}: {reason}")]
    PreviewRead { file: String, reason: String },

    #[error("Failed to save CSV to {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not in the label table: {0}")]
    UnknownFile(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// UI上で警告（黄色）として扱う条件か
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Error::NoMatchingFiles { .. } | Error::NoFolderSelected | Error::PreviewRead { .. }
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
