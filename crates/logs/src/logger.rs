use crate::Result;
use etcetera::{
    app_strategy::choose_native_strategy, AppStrategy, AppStrategyArgs,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use time::OffsetDateTime;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const APP_NAME: &str = "wordpass";
const APP_AUTHOR: &str = "wordpass";
const LOGS_DIR: &str = "logs";
const LOG_FILE_NAME: &str = "wordpass.log";
const DEFAULT_LOG_LEVEL: &str = "wordpass=info,wordpass_password=info";

/// State of the log files on disc.
#[derive(Debug)]
pub struct LogFileStatus {
    /// Path to the log file for today.
    pub current: PathBuf,
    /// Size of the log file for today.
    pub current_size: u64,
    /// Log files for previous days.
    pub log_files: Vec<PathBuf>,
    /// Total size of all log files.
    pub total_size: u64,
}

/// Log to file and the console.
///
/// Files are rotated daily and written as JSON lines.
#[derive(Debug, Clone)]
pub struct Logger {
    logs_dir: PathBuf,
    name: String,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Logger {
    /// Create a logger.
    ///
    /// When no directory is given the platform data
    /// directory is used.
    pub fn new(logs_dir: Option<PathBuf>) -> Self {
        let logs_dir = logs_dir.unwrap_or_else(default_logs_dir);
        Self {
            logs_dir,
            name: LOG_FILE_NAME.to_string(),
        }
    }

    /// Directory containing the log files.
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Initialize a subscriber that writes to the
    /// console and the log file.
    pub fn init_subscriber(
        &self,
        default_log_level: Option<String>,
    ) -> Result<()> {
        fs::create_dir_all(&self.logs_dir)?;
        let file_appender =
            tracing_appender::rolling::daily(&self.logs_dir, &self.name);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
            .json()
            .with_writer(file_appender);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter(default_log_level))
            .with(file_layer)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }

    /// Path to the log file for today.
    pub fn log_file(&self) -> PathBuf {
        let date = OffsetDateTime::now_utc().date();
        self.logs_dir.join(format!(
            "{}.{:04}-{:02}-{:02}",
            self.name,
            date.year(),
            u8::from(date.month()),
            date.day(),
        ))
    }

    /// Sizes of the log files.
    pub fn status(&self) -> Result<LogFileStatus> {
        let current = self.log_file();
        let current_size = if current.exists() {
            fs::metadata(&current)?.len()
        } else {
            0
        };

        let log_files = self.previous_log_files()?;
        let mut total_size = current_size;
        for path in &log_files {
            total_size += fs::metadata(path)?.len();
        }

        Ok(LogFileStatus {
            current,
            current_size,
            log_files,
            total_size,
        })
    }

    /// Delete log files for previous days.
    ///
    /// Returns the number of bytes freed.
    pub fn delete_logs(&self) -> Result<u64> {
        let mut freed = 0;
        for path in self.previous_log_files()? {
            freed += fs::metadata(&path)?.len();
            fs::remove_file(&path)?;
        }
        Ok(freed)
    }

    fn previous_log_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if !self.logs_dir.is_dir() {
            return Ok(files);
        }

        let current = self.log_file();
        let prefix = format!("{}.", self.name);
        for entry in fs::read_dir(&self.logs_dir)? {
            let path = entry?.path();
            let is_log = path
                .file_name()
                .map(|name| name.to_string_lossy().starts_with(&prefix))
                .unwrap_or(false);
            if path.is_file() && is_log && path != current {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn env_filter(default_log_level: Option<String>) -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| {
        default_log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned())
    }))
}

fn default_logs_dir() -> PathBuf {
    let data_dir = choose_native_strategy(AppStrategyArgs {
        top_level_domain: "com".to_string(),
        author: APP_AUTHOR.to_string(),
        app_name: APP_NAME.to_string(),
    })
    .map(|strategy| strategy.data_dir())
    .unwrap_or_else(|_| std::env::temp_dir().join(APP_NAME));
    data_dir.join(LOGS_DIR)
}
