use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioQaError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("WAV読み込みエラー: {0}")]
    WavHeader(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] audio_qa_common::Error),
}

impl AudioQaError {
    /// 警告扱い（終了コード0）の条件か
    pub fn is_warning(&self) -> bool {
        matches!(self, AudioQaError::Common(err) if err.is_warning())
    }
}

impl From<dialoguer::Error> for AudioQaError {
    fn from(err: dialoguer::Error) -> Self {
        AudioQaError::Prompt(err.to_string())
    }
}

impl From<hound::Error> for AudioQaError {
    fn from(err: hound::Error) -> Self {
        AudioQaError::WavHeader(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AudioQaError>;
