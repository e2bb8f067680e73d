use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "audio-qa")]
#[command(about = "Audio QA CSV Builder: WAVファイルにgood/badを付けてaudios.csvを出力", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// 対象拡張子（設定ファイルより優先）
    #[arg(long, global = true)]
    pub ext: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ直下の音声ファイルを一覧表示
    List {
        /// フォルダのパス（省略時は入力を求める）
        folder: Option<PathBuf>,
    },

    /// ラベルを付けてCSVを出力（標準出力またはファイル）
    Export {
        /// フォルダのパス（省略時は入力を求める）
        folder: Option<PathBuf>,

        /// goodにするファイル名（複数指定可）
        #[arg(short, long = "good", value_name = "FILE")]
        good: Vec<String>,

        /// 出力CSVファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ラベルを付けてフォルダ内にaudios.csvを保存
    Save {
        /// フォルダのパス（省略時は入力を求める）
        folder: Option<PathBuf>,

        /// goodにするファイル名（複数指定可）
        #[arg(short, long = "good", value_name = "FILE")]
        good: Vec<String>,
    },

    /// 対話的にチェックを付けて保存
    Label {
        /// フォルダのパス（省略時は入力を求める）
        folder: Option<PathBuf>,

        /// 保存せずCSVを標準出力に表示
        #[arg(long)]
        no_save: bool,
    },

    /// ファイルを読み込んでWAV情報を表示
    Preview {
        /// フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// ファイル名
        #[arg(required = true)]
        file: String,
    },

    /// 設定を表示/編集
    Config {
        /// 対象拡張子を設定
        #[arg(long)]
        set_extension: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_with_goods() {
        let cli = Cli::parse_from([
            "audio-qa", "export", "/music", "--good", "a.wav", "-g", "b.wav", "-o", "out.csv",
        ]);
        match cli.command {
            Commands::Export { folder, good, output } => {
                assert_eq!(folder, Some(PathBuf::from("/music")));
                assert_eq!(good, vec!["a.wav", "b.wav"]);
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["audio-qa", "list", "--ext", "flac", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.ext.as_deref(), Some("flac"));
        assert!(matches!(cli.command, Commands::List { folder: None }));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["audio-qa", "list", "-q", "-v"]).is_err());
    }
}
