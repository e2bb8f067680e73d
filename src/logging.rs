use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// 環境変数名（`EnvFilter` の書式）
pub const LOG_ENV: &str = "AUDIO_QA_LOG";

/// ログレベルを決める（quiet > verbose > 設定ファイル > 既定warn）
pub fn default_level<'a>(quiet: bool, verbose: bool, configured: Option<&'a str>) -> &'a str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    }
}

pub fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
