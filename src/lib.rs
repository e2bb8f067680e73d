//! Audio QA CSV Builder
//!
//! フォルダ直下のWAVファイルを一覧し、good/badを付けて `audios.csv` を出力するCLI。
//! 中核の処理は `audio-qa-common` にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod label;
pub mod logging;
pub mod picker;
pub mod preview;

use audio_qa_common::{FolderPicker, PreviewClip, Session};
use error::Result;
use std::path::PathBuf;

/// フォルダ引数があればそれを、なければピッカーで選ばせて読み込む
pub fn open_session(
    extension: &str,
    folder: Option<PathBuf>,
    picker: &mut dyn FolderPicker,
) -> Result<Session> {
    let mut session = Session::new(extension);
    match folder {
        Some(folder) => session.select_folder(folder),
        None => {
            session.pick_folder(picker);
        }
    }
    let outcome = session.load()?;
    eprintln!("✔ {}", outcome.message());
    Ok(session)
}

/// フォルダを読み込み、表に載っているファイルだけを試聴用に読む
pub fn preview_file(
    extension: &str,
    folder: PathBuf,
    file: &str,
    picker: &mut dyn FolderPicker,
) -> Result<PreviewClip> {
    let session = open_session(extension, Some(folder), picker)?;
    Ok(session.preview(file)?)
}

/// 表を端末に表示
pub fn print_table(session: &Session) {
    let table = session.table();
    let width = table
        .filenames()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("filename".len());

    println!("{:<width$}  file good or bad", "filename", width = width);
    for row in table.rows() {
        let mark = if row.is_good { "TRUE" } else { "" };
        println!("{:<width$}  {}", row.filename, mark, width = width);
    }
}
