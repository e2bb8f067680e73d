use audio_qa_common::{Error, LoadOutcome, Session, NO_PREVIEW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    pub fn from_error(err: &Error) -> Self {
        if err.is_warning() {
            Self::warning(err.to_string())
        } else {
            Self::error(err.to_string())
        }
    }

    pub fn from_load(result: &Result<LoadOutcome, Error>) -> Self {
        match result {
            Ok(outcome) => Self::success(outcome.message()),
            Err(err) => Self::from_error(err),
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self { kind: StatusKind::Info, text: String::new() }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Session,
    pub preview_choice: String,
    pub status: StatusLine,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            preview_choice: NO_PREVIEW.to_string(),
            status: StatusLine::default(),
        }
    }
}

impl AppState {
    /// 選択フォルダを読み込む（試聴選択はリセット）
    pub fn load(&mut self) {
        let result = self.session.load();
        self.preview_choice = NO_PREVIEW.to_string();
        self.status = StatusLine::from_load(&result);
    }

    /// 表示行のチェック変更をまとめて反映
    pub fn apply_checks(&mut self, changes: &[(usize, bool)]) {
        for &(index, value) in changes {
            if let Err(err) = self.session.set_good_at(index, value) {
                self.status = StatusLine::from_error(&err);
            }
        }
    }

    pub fn save_to_folder(&mut self) {
        self.status = match self.session.save_to_folder() {
            Ok(out) => StatusLine::success(format!("Saved: {}", out.display())),
            Err(err) => StatusLine::error(format!("{} (Download CSV is still available)", err)),
        };
    }
}
