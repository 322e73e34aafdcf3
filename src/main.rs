use anyhow::Result;
use clap::Parser;

use quipster::cli::Cli;
use quipster::config::Config;
use quipster::logger;
use quipster::utils::{print_warning, report_error};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    let config = match Config::load_custom(&config_path) {
        Ok(config) => config,
        Err(err) => {
            report_error(&err);
            print_warning("Falling back to default configuration");
            Config::default()
        }
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    if let Err(err) = logger::init(&config, cli.debug) {
        report_error(&err);
    }

    cli.command.execute(config, &config_path)
}
