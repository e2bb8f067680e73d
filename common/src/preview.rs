//! 試聴用のファイル読み込み
//!
//! 失敗してもセッション状態は変えず、警告として扱う。

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 試聴セレクタの「選択なし」
pub const NO_PREVIEW: &str = "(none)";

/// 読み込んだ音声データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewClip {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl PreviewClip {
    /// 拡張子から推定したMIMEタイプ
    pub fn mime(&self) -> String {
        match self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
        {
            Some(ext) if ext == "wav" => "audio/wav".to_string(),
            Some(ext) if ext == "mp3" => "audio/mpeg".to_string(),
            Some(ext) => format!("audio/{}", ext),
            None => "application/octet-stream".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// フォルダ内のファイルを読み込む
///
/// `filename` はパスを含まないファイル名のみ（`../x` や `sub/x.wav` は拒否）。
pub fn read_preview(folder: &Path, filename: &str) -> Result<PreviewClip> {
    if !is_plain_basename(filename) {
        warn!("preview name is not a plain file name: {}", filename);
        return Err(Error::UnknownFile(filename.to_string()));
    }
    let candidate = folder.join(filename);

    if !candidate.is_file() {
        warn!("preview target missing: {}", candidate.display());
        return Err(Error::PreviewRead {
            file: filename.to_string(),
            reason: "file not found".to_string(),
        });
    }

    let bytes = std::fs::read(&candidate).map_err(|err| {
        warn!("preview read failed for {}: {}", candidate.display(), err);
        Error::PreviewRead {
            file: filename.to_string(),
            reason: err.to_string(),
        }
    })?;

    Ok(PreviewClip {
        filename: filename.to_string(),
        path: candidate,
        bytes,
    })
}

/// パス区切りや `..` を含まない単一のファイル名か
pub fn is_plain_basename(filename: &str) -> bool {
    Path::new(filename).file_name() == Some(OsStr::new(filename))
}
