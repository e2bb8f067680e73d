//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use audio_qa_common::{read_preview, scan_folder, Error, Session, SessionState};
use audio_qa_csv::error::AudioQaError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scan_folder(Path::new("/nonexistent/path/12345"), "wav");
    assert!(matches!(result, Err(Error::NotAFolder(_))));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scan_folder(dir.path(), "wav");

    // 空フォルダはエラーではなく空の表を返す
    assert!(result.unwrap().is_empty());
}

/// WAVのないフォルダを読み込んだ場合は警告
#[test]
fn test_load_folder_without_wavs() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let mut session = Session::default();
    session.select_folder(dir.path());
    let err = session.load().unwrap_err();

    assert!(matches!(err, Error::NoMatchingFiles { .. }));
    assert!(err.is_warning());
    assert!(session.table().is_empty());
}

/// 読み込み後に消えたファイルの試聴
#[test]
fn test_preview_vanished_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.wav");
    std::fs::write(&file, b"RIFF").unwrap();

    let mut session = Session::default();
    session.select_folder(dir.path());
    session.load().unwrap();
    std::fs::remove_file(&file).unwrap();

    let err = session.preview("a.wav").unwrap_err();
    assert!(matches!(err, Error::PreviewRead { .. }));
    assert!(err.is_warning());
    assert_eq!(session.state(), SessionState::Loaded);
    assert_eq!(session.table().len(), 1);
}

#[test]
fn test_read_preview_missing() {
    let dir = tempdir().unwrap();
    assert!(read_preview(dir.path(), "none.wav").is_err());
}

/// 保存先フォルダが消えていた場合
#[test]
fn test_save_into_removed_folder() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.wav"), b"").unwrap();

    let mut session = Session::default();
    session.select_folder(dir.path());
    session.load().unwrap();

    let path = dir.path().to_path_buf();
    dir.close().unwrap();
    assert!(!path.exists());

    let err = session.save_to_folder().unwrap_err();
    assert!(matches!(err, Error::IoFailure { .. }));
    assert!(!err.is_warning());
    assert_eq!(session.state(), SessionState::Loaded);
}

/// 共通エラーは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let err: AudioQaError = Error::NotAFolder("/x".to_string()).into();
    assert!(matches!(err, AudioQaError::Common(_)));
    assert_eq!(
        format!("{}", err),
        "That path doesn't exist or isn't a folder: /x"
    );
    assert!(!err.is_warning());
}

#[test]
fn test_warning_passes_through_wrapper() {
    let err: AudioQaError = Error::NoFolderSelected.into();
    assert!(err.is_warning());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AudioQaError = io_err.into();

    assert!(matches!(err, AudioQaError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AudioQaError = json_err.into();

    assert!(matches!(err, AudioQaError::JsonParse(_)));
}
