//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use taxostage::config::Config;
use taxostage::core::models::{BatchMode, SiblingScope};
use taxostage::output::OutputMode;

/// taxostage - Status propagation over an evolving class taxonomy
#[derive(Parser, Debug)]
#[command(
    name = "taxostage",
    version,
    about = "Status propagation over an evolving class taxonomy",
    long_about = "Replay taxonomy evolution scenarios and report label statuses.\n\n\
                  Each scenario builds a class tree, attaches an extract of labelled items,\n\
                  applies structural edits and reports how trustworthy each item's labels are."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./taxostage.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding numbered scenario folders
    #[arg(long, global = true)]
    pub scenarios_dir: Option<PathBuf>,

    /// Which children are re-staged on insertion: existing, all
    #[arg(long, global = true)]
    pub sibling_scope: Option<SiblingScope>,

    /// Behaviour of a failing insertion batch: atomic, sequential
    #[arg(long, global = true)]
    pub batch_mode: Option<BatchMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default taxostage.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Replay one scenario and report item statuses
    Run {
        /// Scenario id (directory name)
        id: u32,
    },

    /// Replay every scenario and report accuracy
    Eval {
        /// Fail when the mean accuracy is below this value (0.0 - 1.0)
        #[arg(long)]
        min_accuracy: Option<f64>,
    },

    /// List available scenarios
    List,

    /// Show version
    Version,
}

impl Cli {
    /// Resolve config from file and apply command-line overrides
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let (mut config, source) = Config::discover(self.config.as_deref())?;
        if let Some(path) = source {
            log::debug!("loaded config from {}", path.display());
        }

        if let Some(dir) = &self.scenarios_dir {
            config.scenarios.dir.clone_from(dir);
        }
        if let Some(scope) = self.sibling_scope {
            config.propagation.sibling_scope = scope;
        }
        if let Some(mode) = self.batch_mode {
            config.propagation.batch_mode = mode;
        }

        Ok(config)
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Run { id }) => commands::run(id, &cli.resolve_config()?, output_mode),
        Some(Command::Eval { min_accuracy }) => {
            commands::eval(min_accuracy, &cli.resolve_config()?, output_mode)
        },
        Some(Command::List) => commands::list(&cli.resolve_config()?, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": taxostage::VERSION
                    })
                );
            } else {
                println!("taxostage v{}", taxostage::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": taxostage::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taxostage v{}", taxostage::VERSION);
                println!("\nRun 'taxostage --help' for usage");
                println!("Run 'taxostage run <id>' to replay a scenario");
            }
            Ok(())
        },
    }
}
