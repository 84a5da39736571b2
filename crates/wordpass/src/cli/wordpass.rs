use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use wordpass_cli_helpers::CommandTree;
use wordpass_logs::Logger;

use crate::{
    commands::{
        config, generate, generate::GenerateArgs, logs, shell,
        ConfigCommand, LogsCommand,
    },
    helpers::set_interrupt_handler,
    Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Wordpass {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate passwords.
    #[clap(alias = "gen")]
    Generate(GenerateArgs),
    /// Interactive password generator.
    Shell {
        /// Word list file, one word per line.
        #[clap(long)]
        corpus: Option<PathBuf>,

        /// Configuration file used for prompt defaults.
        #[clap(long)]
        config: Option<PathBuf>,

        /// Append passwords to a file instead of printing them.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect and create configuration files.
    Config {
        #[clap(subcommand)]
        cmd: ConfigCommand,
    },
    /// Inspect and delete log files.
    Logs {
        #[clap(subcommand)]
        cmd: LogsCommand,
    },
}

pub fn run(logger: &Logger) -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("WORDPASS_CLI_JSON").ok().is_some() {
        let cmd = Wordpass::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        std::process::exit(0);
    }

    set_interrupt_handler()?;

    let args = Wordpass::parse();
    match args.cmd {
        Command::Generate(args) => generate::run(args)?,
        Command::Shell {
            corpus,
            config,
            output,
        } => shell::run(corpus, config, output)?,
        Command::Config { cmd } => config::run(cmd)?,
        Command::Logs { cmd } => logs::run(cmd, logger)?,
    }
    Ok(())
}
