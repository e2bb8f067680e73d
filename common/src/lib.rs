//! Audio QA Common Library
//!
//! CLIとデスクトップで共有される型と処理:
//! フォルダ直下のスキャン、ラベル表の編集、CSV出力、試聴用読み込み

pub mod error;
pub mod export;
pub mod picker;
pub mod preview;
pub mod scanner;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use export::{encode_csv, save_csv_to_folder, CsvDownload, CSV_MIME, CSV_NAME};
pub use picker::{FixedPicker, FolderPicker};
pub use preview::{read_preview, PreviewClip, NO_PREVIEW};
pub use scanner::{scan_folder, DEFAULT_EXTENSION};
pub use session::{LoadOutcome, Session, SessionState};
pub use types::{LabelRow, LabelTable};
