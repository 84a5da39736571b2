use crate::{
    commands::{load_config, GeneratorOptions},
    helpers::messages,
    Result,
};
use clap::Subcommand;
use std::{io, path::PathBuf};
use wordpass_password::GeneratorConfig;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration as TOML.
    Show {
        /// Configuration file (TOML).
        #[clap(long)]
        config: Option<PathBuf>,

        #[clap(flatten)]
        options: GeneratorOptions,
    },
    /// Write the default configuration to a file.
    Init {
        /// Overwrite an existing file.
        #[clap(short, long)]
        force: bool,

        /// Destination file.
        file: PathBuf,
    },
}

/// Handle config commands.
pub fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Show { config, options } => {
            let config = options.apply(load_config(config.as_deref())?);
            config.validate()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Command::Init { force, file } => {
            if file.exists() && !force {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", file.display()),
                )
                .into());
            }
            let contents =
                toml::to_string_pretty(&GeneratorConfig::default())?;
            std::fs::write(&file, contents)?;
            messages::success(format!("Wrote {}", file.display()));
        }
    }
    Ok(())
}
