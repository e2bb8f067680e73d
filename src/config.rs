use crate::error::{AudioQaError, Result};
use audio_qa_common::scanner::normalize_extension;
use audio_qa_common::DEFAULT_EXTENSION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 対象拡張子（大文字小文字は区別しない）
    pub extension: String,
    /// ログレベル（error/warn/info/debug）。`AUDIO_QA_LOG` が優先
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.into(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルがなければ既定値
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AudioQaError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("audio-qa").join("config.json"))
    }

    pub fn set_extension(&mut self, ext: &str) -> Result<()> {
        let normalized = normalize_extension(ext);
        if normalized.is_empty() || normalized.contains(['/', '\\', '.']) {
            return Err(AudioQaError::Config(format!("拡張子が不正です: {}", ext)));
        }
        self.extension = normalized;
        Ok(())
    }
}
