use std::path::PathBuf;
use wordpass::{Result, TARGET};
use wordpass_logs::Logger;

fn main() -> Result<()> {
    let logs_dir = std::env::var("WORDPASS_LOGS_DIR").ok().map(PathBuf::from);
    let logger = Logger::new(logs_dir);
    logger.init_subscriber(None)?;

    if let Err(e) = wordpass::cli::wordpass::run(&logger) {
        if !e.is_interrupted() {
            tracing::error!(target: TARGET, "{}", e);
        }
        let _ = kdam::term::show_cursor();
        std::process::exit(1);
    }

    Ok(())
}
