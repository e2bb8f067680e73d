//! ラベル付け（引数指定・対話式）
//!
//! 対話式はチェックボックス一覧（初期状態はすべて未チェック）で選ばせる。

use crate::error::Result;
use audio_qa_common::Session;
use dialoguer::MultiSelect;

/// 指定されたファイルをgoodにする。表にない名前はエラー
pub fn apply_goods(session: &mut Session, goods: &[String]) -> Result<()> {
    for name in goods {
        session.set_good(name, true)?;
    }
    Ok(())
}

/// 選択された行番号をgood、それ以外をbadにする
pub fn apply_selection(session: &mut Session, selected: &[usize]) -> Result<()> {
    for index in 0..session.table().len() {
        session.set_good_at(index, selected.contains(&index))?;
    }
    Ok(())
}

/// 対話式ラベル付け
pub fn run_interactive_label(session: &mut Session) -> Result<()> {
    let names: Vec<String> = session.table().filenames().map(str::to_string).collect();
    let defaults: Vec<bool> = session.table().rows().iter().map(|r| r.is_good).collect();

    println!("操作: [Space]チェック切替 [Enter]確定（チェック = good）");

    let selected = MultiSelect::new()
        .with_prompt("file good or bad")
        .items(&names[..])
        .defaults(&defaults[..])
        .max_length(20)
        .interact()?;

    apply_selection(session, &selected)?;
    println!(
        "✔ {}/{}件をgoodに設定",
        session.table().good_count(),
        session.table().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioQaError;
    use std::fs::File;
    use tempfile::tempdir;

    fn loaded_session(names: &[&str]) -> (tempfile::TempDir, Session) {
        let dir = tempdir().unwrap();
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }
        let mut session = Session::default();
        session.select_folder(dir.path());
        session.load().unwrap();
        (dir, session)
    }

    #[test]
    fn test_apply_goods() {
        let (_dir, mut session) = loaded_session(&["a.wav", "b.wav"]);
        apply_goods(&mut session, &["b.wav".to_string()]).unwrap();
        assert!(session.table().get("b.wav").unwrap().is_good);
        assert!(!session.table().get("a.wav").unwrap().is_good);
    }

    #[test]
    fn test_apply_goods_unknown_file() {
        let (_dir, mut session) = loaded_session(&["a.wav"]);
        let err = apply_goods(&mut session, &["zzz.wav".to_string()]).unwrap_err();
        assert!(matches!(
            err,
            AudioQaError::Common(audio_qa_common::Error::UnknownFile(_))
        ));
    }

    #[test]
    fn test_apply_selection_sets_and_clears() {
        let (_dir, mut session) = loaded_session(&["a.wav", "b.wav", "c.wav"]);
        apply_selection(&mut session, &[0, 1, 2]).unwrap();
        assert_eq!(session.table().good_count(), 3);

        apply_selection(&mut session, &[1]).unwrap();
        assert_eq!(session.table().good_count(), 1);
        assert!(session.table().rows()[1].is_good);
    }
}
