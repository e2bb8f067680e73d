//! ラベル表の型定義
//!
//! - LabelRow: ファイル名 + good/bad フラグ
//! - LabelTable: 読み込んだフォルダのLabelRow一覧（行の追加・削除は不可）

use crate::error::{Error, Result};
use std::collections::HashSet;

/// 1ファイル分のラベル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRow {
    /// ファイル名（パスなし）
    pub filename: String,

    /// 良い音声ならtrue（既定はfalse）
    pub is_good: bool,
}

impl LabelRow {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            is_good: false,
        }
    }
}

/// ラベル表
///
/// 行集合は構築時に固定される。編集できるのは各行の `is_good` のみ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    rows: Vec<LabelRow>,
}

impl LabelTable {
    /// ファイル名一覧から表を作る（全行false）
    ///
    /// 重複したファイル名は最初の1件だけ残す。
    pub fn from_filenames<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut rows: Vec<LabelRow> = Vec::new();
        for name in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                continue;
            }
            rows.push(LabelRow::new(name));
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.filename.as_str())
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.rows.iter().any(|r| r.filename == filename)
    }

    pub fn good_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_good).count()
    }

    pub fn get(&self, filename: &str) -> Option<&LabelRow> {
        self.rows.iter().find(|r| r.filename == filename)
    }

    /// フラグを反転し、反転後の値を返す
    pub fn toggle(&mut self, filename: &str) -> Result<bool> {
        let row = self.row_mut(filename)?;
        row.is_good = !row.is_good;
        Ok(row.is_good)
    }

    pub fn set_good(&mut self, filename: &str, is_good: bool) -> Result<()> {
        self.row_mut(filename)?.is_good = is_good;
        Ok(())
    }

    /// 表示行番号で指定（チェックボックス用）
    pub fn set_good_at(&mut self, index: usize, is_good: bool) -> Result<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| Error::UnknownFile(format!("#{}", index)))?;
        row.is_good = is_good;
        Ok(())
    }

    fn row_mut(&mut self, filename: &str) -> Result<&mut LabelRow> {
        self.rows
            .iter_mut()
            .find(|r| r.filename == filename)
            .ok_or_else(|| Error::UnknownFile(filename.to_string()))
    }
}
