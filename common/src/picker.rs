//! フォルダ選択の抽象化
//!
//! ネイティブダイアログ（デスクトップ）や端末入力（CLI）を差し替え可能にする。

use std::path::PathBuf;

/// フォルダ選択
pub trait FolderPicker {
    /// 選択されたフォルダ。キャンセル時は `None`
    fn choose_directory(&mut self) -> Option<PathBuf>;
}

/// 固定パスを返すピッカー（テスト・引数指定時用）
#[derive(Debug, Clone, Default)]
pub struct FixedPicker {
    path: Option<PathBuf>,
}

impl FixedPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// 常にキャンセルするピッカー
    pub fn cancelled() -> Self {
        Self { path: None }
    }
}

impl FolderPicker for FixedPicker {
    fn choose_directory(&mut self) -> Option<PathBuf> {
        self.path.clone()
    }
}

impl<F> FolderPicker for F
where
    F: FnMut() -> Option<PathBuf>,
{
    fn choose_directory(&mut self) -> Option<PathBuf> {
        self()
    }
}
