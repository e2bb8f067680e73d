mod app;
mod io;
mod model;
mod player;

use app::DesktopApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_env("AUDIO_QA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("failed to initialize tracing subscriber: {err}");
    }

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Audio QA CSV Builder",
        options,
        Box::new(|_cc| Box::new(DesktopApp::default())),
    )
}
