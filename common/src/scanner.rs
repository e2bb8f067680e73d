//! フォルダ直下の音声ファイル一覧
//!
//! 直下のみ（再帰しない）、拡張子は大文字小文字を区別せずに比較する。

use crate::error::{Error, Result};
use crate::types::LabelTable;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 既定の対象拡張子
pub const DEFAULT_EXTENSION: &str = "wav";

/// 拡張子を比較用に正規化（先頭の`.`を除去して小文字化）
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// パスの拡張子が対象か
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = normalize_extension(extension);
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(&wanted))
        .unwrap_or(false)
}

/// フォルダ直下をスキャンしてラベル表を作る
///
/// 該当ファイルが0件でもエラーにはしない（空の表を返す）。
pub fn scan_folder(folder: &Path, extension: &str) -> Result<LabelTable> {
    if !folder.is_dir() {
        return Err(Error::NotAFolder(folder.display().to_string()));
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1) // 直下のみ
        .into_iter()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("skip unreadable entry: {}", err);
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() || !has_extension(path, extension) {
            continue;
        }

        // UTF-8でない名前は表に載せても元のファイルを指せない
        let file_name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                warn!("skip non UTF-8 file name: {}", path.display());
                continue;
            }
        };
        debug!("found {}", file_name);
        names.push(file_name);
    }

    Ok(LabelTable::from_filenames(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn sorted_names(table: &LabelTable) -> Vec<String> {
        let mut names: Vec<String> = table.filenames().map(str::to_string).collect();
        names.sort();
        names
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".WAV"), "wav");
        assert_eq!(normalize_extension("wav"), "wav");
        assert_eq!(normalize_extension(" .Flac "), "flac");
    }

    #[test]
    fn test_has_extension_case_insensitive() {
        assert!(has_extension(Path::new("a.wav"), "wav"));
        assert!(has_extension(Path::new("a.WAV"), ".wav"));
        assert!(has_extension(Path::new("a.Wav"), "WAV"));
        assert!(!has_extension(Path::new("a.wav.txt"), "wav"));
        assert!(!has_extension(Path::new("wav"), "wav"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), DEFAULT_EXTENSION);
        assert!(matches!(result, Err(Error::NotAFolder(_))));
    }

    #[test]
    fn test_scan_file_is_not_a_folder() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.wav");
        File::create(&file).unwrap();

        let result = scan_folder(&file, DEFAULT_EXTENSION);
        assert!(matches!(result, Err(Error::NotAFolder(_))));
    }

    #[test]
    fn test_scan_folder_empty() {
        let dir = tempdir().unwrap();
        let table = scan_folder(dir.path(), DEFAULT_EXTENSION).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_scan_filters_extension_and_directories() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.wav")).unwrap();
        File::create(dir.path().join("B.WAV")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("song.mp3")).unwrap();
        fs::create_dir(dir.path().join("folder.wav")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("nested.wav")).unwrap();

        let table = scan_folder(dir.path(), DEFAULT_EXTENSION).unwrap();
        assert_eq!(sorted_names(&table), vec!["B.WAV", "a.wav"]);
        assert!(table.rows().iter().all(|r| !r.is_good));
    }

    #[test]
    fn test_scan_other_extension() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.wav")).unwrap();
        File::create(dir.path().join("b.flac")).unwrap();

        let table = scan_folder(dir.path(), ".FLAC").unwrap();
        assert_eq!(sorted_names(&table), vec!["b.flac"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        File::create(dir.path().join("ok.wav")).unwrap();
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xff.wav"))).unwrap();

        let table = scan_folder(dir.path(), "wav").unwrap();
        assert_eq!(sorted_names(&table), vec!["ok.wav"]);
    }
}
