//! セッション（選択フォルダとラベル表を保持）
//!
//! 状態遷移: Empty → Loaded → Edited → Exported。読み込みは常に Loaded に戻す。

use crate::error::{Error, Result};
use crate::export::{encode_csv, save_csv_to_folder, CsvDownload};
use crate::picker::FolderPicker;
use crate::preview::{read_preview, PreviewClip};
use crate::scanner::{normalize_extension, scan_folder, DEFAULT_EXTENSION};
use crate::types::LabelTable;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Loaded,
    Edited,
    Exported,
}

/// 読み込み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub folder: PathBuf,
    pub count: usize,
    pub extension: String,
}

impl LoadOutcome {
    pub fn message(&self) -> String {
        format!(
            "Loaded {} .{} files from: {}",
            self.count,
            self.extension,
            self.folder.display()
        )
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    /// ピッカーで選ばれたフォルダ（未読み込みの場合あり）
    selected: Option<PathBuf>,
    /// ラベル表の読み込み元
    active: Option<PathBuf>,
    table: LabelTable,
    extension: String,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl Session {
    pub fn new(extension: &str) -> Self {
        Self {
            selected: None,
            active: None,
            table: LabelTable::default(),
            extension: normalize_extension(extension),
            state: SessionState::Empty,
        }
    }

    pub fn selected_folder(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn active_folder(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    pub fn table(&self) -> &LabelTable {
        &self.table
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// ピッカーでフォルダを選ぶ。キャンセル時は現在の選択を維持
    pub fn pick_folder(&mut self, picker: &mut dyn FolderPicker) -> Option<&Path> {
        if let Some(chosen) = picker.choose_directory() {
            self.selected = Some(chosen);
        }
        self.selected.as_deref()
    }

    pub fn select_folder(&mut self, folder: impl Into<PathBuf>) {
        self.selected = Some(folder.into());
    }

    /// 選択フォルダを読み込み、ラベル表を丸ごと置き換える
    ///
    /// 該当ファイルが0件の場合は表を空にして `NoMatchingFiles`（警告）を返す。
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let selected = self.selected.clone().ok_or(Error::NoFolderSelected)?;
        let base = resolve_folder(&selected);

        let table = match scan_folder(&base, &self.extension) {
            Ok(table) => table,
            Err(err) => {
                warn!("load failed: {}", err);
                self.table = LabelTable::default();
                self.active = None;
                self.state = SessionState::Empty;
                return Err(err);
            }
        };

        let count = table.len();
        self.table = table;
        self.active = Some(base.clone());
        self.state = SessionState::Loaded;

        if count == 0 {
            warn!("no .{} files in {}", self.extension, base.display());
            return Err(Error::NoMatchingFiles {
                folder: base.display().to_string(),
                extension: self.extension.clone(),
            });
        }

        info!("loaded {} files from {}", count, base.display());
        Ok(LoadOutcome {
            folder: base,
            count,
            extension: self.extension.clone(),
        })
    }

    pub fn toggle(&mut self, filename: &str) -> Result<bool> {
        let value = self.table.toggle(filename)?;
        self.state = SessionState::Edited;
        Ok(value)
    }

    pub fn set_good(&mut self, filename: &str, is_good: bool) -> Result<()> {
        self.table.set_good(filename, is_good)?;
        self.state = SessionState::Edited;
        Ok(())
    }

    pub fn set_good_at(&mut self, index: usize, is_good: bool) -> Result<()> {
        self.table.set_good_at(index, is_good)?;
        self.state = SessionState::Edited;
        Ok(())
    }

    pub fn csv_text(&self) -> Result<String> {
        encode_csv(&self.table)
    }

    /// ダウンロード用CSV
    pub fn download(&mut self) -> Result<CsvDownload> {
        let download = CsvDownload::from_table(&self.table)?;
        self.state = SessionState::Exported;
        Ok(download)
    }

    /// 読み込み元フォルダに `audios.csv` を保存
    ///
    /// 失敗しても状態は変えない（ダウンロードは引き続き可能）。
    pub fn save_to_folder(&mut self) -> Result<PathBuf> {
        let folder = self.active.clone().ok_or(Error::NoFolderSelected)?;
        let text = self.csv_text()?;
        let out = save_csv_to_folder(&text, &folder)?;
        self.state = SessionState::Exported;
        Ok(out)
    }

    /// 表にあるファイルを試聴用に読み込む
    pub fn preview(&self, filename: &str) -> Result<PreviewClip> {
        let folder = self.active.as_deref().ok_or(Error::NoFolderSelected)?;
        if !self.table.contains(filename) {
            return Err(Error::UnknownFile(filename.to_string()));
        }
        read_preview(folder, filename)
    }
}

/// `~` を展開し、絶対パスに解決する
pub fn resolve_folder(folder: &Path) -> PathBuf {
    let expanded = expand_home(folder);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };
    absolute.canonicalize().unwrap_or(absolute)
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
