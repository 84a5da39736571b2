use crate::{
    commands::{corpus_source, load_config, GeneratorOptions},
    helpers::{batch::run_batch, messages},
    Result,
};
use clap::Args;
use std::path::PathBuf;
use wordpass_password::PasswordGenerator;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of passwords to generate.
    #[clap(short, long, default_value = "1")]
    pub count: usize,

    /// Append passwords to a file instead of printing them.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Word list file, one word per line.
    #[clap(long)]
    pub corpus: Option<PathBuf>,

    /// Configuration file (TOML).
    #[clap(long)]
    pub config: Option<PathBuf>,

    #[clap(flatten)]
    pub options: GeneratorOptions,
}

/// Generate passwords without prompting.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = args.options.apply(load_config(args.config.as_deref())?);
    let mode = args.options.mode.unwrap_or_default();

    let mut generator = PasswordGenerator::new(config);
    let words = generator.load(&corpus_source(args.corpus))?;
    tracing::debug!(words = words, mode = %mode, "generate");

    let summary =
        run_batch(&generator, mode, args.count, args.output.as_deref())?;

    if let Some(output) = &args.output {
        let msg = format!(
            "Wrote {} password(s) to {}",
            summary.generated,
            output.display()
        );
        if summary.cancelled {
            messages::warn(format!("{} (cancelled)", msg));
        } else {
            messages::success(msg);
        }
    }
    Ok(())
}
