use crate::{helpers::messages, Result};
use clap::Subcommand;
use wordpass_logs::Logger;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the location and size of the log files.
    Status,
    /// Delete log files for previous days.
    Delete,
}

/// Handle logs commands.
pub fn run(cmd: Command, logger: &Logger) -> Result<()> {
    match cmd {
        Command::Status => {
            let status = logger.status()?;
            println!("Directory: {}", logger.logs_dir().display());
            println!(
                "Current:   {} ({} bytes)",
                status.current.display(),
                status.current_size
            );
            println!("Previous:  {} file(s)", status.log_files.len());
            println!("Total:     {} bytes", status.total_size);
        }
        Command::Delete => {
            let freed = logger.delete_logs()?;
            messages::success(format!("Deleted logs ({} bytes)", freed));
        }
    }
    Ok(())
}
