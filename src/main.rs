use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod components;
mod config;
mod i18n;
mod logging;
mod screens;
mod settings;
mod statusbar;
mod ui;
mod ui_utils;
mod wizard;

use config::WizardConfig;
use i18n::Translator;
use screens::database::FormState;
use ui::App;

#[derive(Parser, Debug)]
#[command(name = "install-wizard", about = "Terminal install wizard: database connection step")]
struct Args {
    /// JSON file with form defaults and display string overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the confirmed settings here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => WizardConfig::load(path)?,
        None => WizardConfig::default(),
    };
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    logging::init_logger(config.log_level_filter());

    let translator = Translator::with_overrides(config.translations.clone());
    let form = FormState::from_defaults(&config.form);
    let mut app = App::new(translator, form);

    let Some(settings) = app.run().await? else {
        log::info!("Setup cancelled, nothing written");
        return Ok(());
    };

    let json = settings.to_json().context("failed to serialize settings")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Settings written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
