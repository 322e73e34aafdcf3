use clap::{Parser, Subcommand, Args};
use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::config::Config;
use crate::commands::{ask, eval, configure};

#[derive(Parser)]
#[command(name = "quipster")]
#[command(about = "Answer keyword queries and simple arithmetic questions")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Log routing decisions to stderr")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file named with `--config`, or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_file_path)
    }
}

impl Commands {
    pub fn execute(self, config: Config, config_path: &Path) -> Result<()> {
        match self {
            Commands::Ask(args) => {
                ask::handle_ask_command(&config, &args)?;
            }
            Commands::Eval(args) => {
                eval::handle_eval_command(&args)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, config_path, args.command)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Route a query and print the raw answer (canned text, JSON payload or fallback)
    Ask(QueryArgs),

    /// Route a query and compute arithmetic payloads into a sentence
    Eval(QueryArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct QueryArgs {
    #[arg(help = "Query text; reads one query per line from stdin when omitted")]
    pub query: Vec<String>,
}

impl QueryArgs {
    /// Words given on the command line joined back into one query
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
