use audio_qa_common::CSV_NAME;
use audio_qa_csv::{
    cli, config, error, label, logging, open_session, picker, preview, preview_file, print_table,
};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("⚠ {}（既定の設定を使用）", err);
            Config::default()
        }
    };

    let level = logging::default_level(cli.quiet, cli.verbose, config.log_level.as_deref());
    if let Err(err) = logging::init_tracing(level) {
        eprintln!("⚠ {}", err);
    }

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_warning() => {
            warn!("{}", err);
            eprintln!("⚠ {}", err);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("✘ {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let extension = cli.ext.clone().unwrap_or_else(|| config.extension.clone());
    let mut picker = picker::PromptPicker::new(&extension);
    debug!("extension: {}", extension);

    match cli.command {
        Commands::List { folder } => {
            let session = open_session(&extension, folder, &mut picker)?;
            println!();
            print_table(&session);
        }

        Commands::Export { folder, good, output } => {
            let mut session = open_session(&extension, folder, &mut picker)?;
            label::apply_goods(&mut session, &good)?;

            let download = session.download()?;
            match output {
                Some(path) => {
                    download.write_to(&path)?;
                    println!("✔ CSVを出力: {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&download.bytes)?;
                    stdout.flush()?;
                }
            }
        }

        Commands::Save { folder, good } => {
            let mut session = open_session(&extension, folder, &mut picker)?;
            label::apply_goods(&mut session, &good)?;

            let out = session.save_to_folder()?;
            println!("✔ Saved: {}", out.display());
        }

        Commands::Label { folder, no_save } => {
            let mut session = open_session(&extension, folder, &mut picker)?;
            label::run_interactive_label(&mut session)?;

            if no_save {
                print!("{}", session.csv_text()?);
            } else {
                match session.save_to_folder() {
                    Ok(out) => println!("✔ Saved: {}", out.display()),
                    Err(err) => {
                        // 保存できなくても内容は失わない
                        println!("--- {} ---", CSV_NAME);
                        print!("{}", session.csv_text()?);
                        return Err(err.into());
                    }
                }
            }
        }

        Commands::Preview { folder, file } => {
            let clip = preview_file(&extension, folder, &file, &mut picker)?;
            println!("🎧 {} ({}, {} bytes)", clip.filename, clip.mime(), clip.len());
            let info = preview::wav_info(&clip)?;
            println!(
                "  {}ch / {}Hz / {}bit / {:.2}秒",
                info.channels,
                info.sample_rate,
                info.bits_per_sample,
                info.duration_secs()
            );
        }

        Commands::Config { set_extension, show } => {
            let mut config = config;

            if let Some(ext) = set_extension {
                config.set_extension(&ext)?;
                config.save()?;
                println!("✔ 拡張子を設定しました: .{}", config.extension);
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  拡張子: .{}", config.extension);
                println!(
                    "  ログレベル: {}",
                    config.log_level.as_deref().unwrap_or("(既定)")
                );
            }
        }
    }

    Ok(())
}
