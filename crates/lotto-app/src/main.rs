use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use lotto_core::AppInfo;

use lotto_app::cli::Cli;
use lotto_app::config::FilterConfig;
use lotto_app::logging::init_logging;
use lotto_app::plan::resolve_plan;
use lotto_app::prompt::Prompter;
use lotto_app::runner::execute;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };

    cli.apply(&mut config);
    config.validate()?;

    let logging = init_logging(&config.logging)?;
    info!(app = AppInfo::name(), version = AppInfo::version(), "starting");

    if cli.validate_only {
        println!("Configuration is valid; sweep skipped.");
        return Ok(());
    }

    let plan = {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
        resolve_plan(&config, &mut prompter).context("collecting pool and filter windows")?
    };

    let outcome = execute(plan, &config.output, &mut io::stdout().lock())?;

    if let Some(path) = outcome.summary_json.as_ref() {
        println!("Summary JSON: {}", path.display());
    }
    if let Some(path) = logging.telemetry_path.as_ref() {
        println!("Telemetry log: {}", path.display());
    }

    Ok(())
}
