use anyhow::{Context, Result};
use std::path::PathBuf;

use audio_qa_common::{CsvDownload, FolderPicker};

/// ネイティブのフォルダ選択ダイアログ
pub struct NativePicker {
    title: String,
}

impl NativePicker {
    pub fn new(extension: &str) -> Self {
        Self {
            title: format!("Select folder with .{extension} files"),
        }
    }
}

impl FolderPicker for NativePicker {
    fn choose_directory(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(&self.title).pick_folder()
    }
}

/// 保存ダイアログでダウンロード用CSVを書き出す。キャンセル時は `None`
pub fn save_download(download: &CsvDownload) -> Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(download.file_name)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return Ok(None);
    };
    download
        .write_to(&path)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(Some(path))
}
