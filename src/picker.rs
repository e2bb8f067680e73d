//! 端末入力でのフォルダ選択

use audio_qa_common::FolderPicker;
use dialoguer::Input;
use std::path::PathBuf;
use tracing::warn;

/// `dialoguer` でパスを入力させるピッカー。空入力はキャンセル扱い
pub struct PromptPicker {
    prompt: String,
}

impl PromptPicker {
    pub fn new(extension: &str) -> Self {
        Self {
            prompt: format!("Select folder with .{} files", extension),
        }
    }
}

impl FolderPicker for PromptPicker {
    fn choose_directory(&mut self) -> Option<PathBuf> {
        let input: String = match Input::<String>::new()
            .with_prompt(&self.prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(s) => s,
            Err(err) => {
                warn!("folder prompt failed: {}", err);
                return None;
            }
        };
        chosen_path(&input)
    }
}

/// 入力文字列をパスに変換（空ならキャンセル）
pub fn chosen_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chosen_path() {
        assert_eq!(chosen_path("  "), None);
        assert_eq!(chosen_path(" /music "), Some(PathBuf::from("/music")));
    }
}
