use crate::{
    helpers::{BATCH_CANCELLED, BATCH_RUNNING},
    Error, Result,
};
use kdam::{tqdm, BarExt};
use std::{
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    path::Path,
    sync::atomic::Ordering,
    time::{Duration, Instant},
};
use wordpass_password::{Mode, PasswordGenerator, RandomSource};

/// Outcome of generating a batch of passwords.
#[derive(Debug)]
pub(crate) struct BatchSummary {
    pub generated: usize,
    pub cancelled: bool,
    pub elapsed: Duration,
}

/// Marks a batch as running until dropped.
struct BatchGuard;

impl BatchGuard {
    fn new() -> Self {
        BATCH_CANCELLED.store(false, Ordering::SeqCst);
        BATCH_RUNNING.store(true, Ordering::SeqCst);
        Self
    }

    fn is_cancelled(&self) -> bool {
        BATCH_CANCELLED.load(Ordering::SeqCst)
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        BATCH_RUNNING.store(false, Ordering::SeqCst);
    }
}

/// Generate passwords printing them to stdout or appending
/// them to a file.
///
/// An interrupt stops the batch between passwords, passwords
/// already generated are kept.
pub(crate) fn run_batch<R: RandomSource>(
    generator: &PasswordGenerator<R>,
    mode: Mode,
    count: usize,
    output: Option<&Path>,
) -> Result<BatchSummary> {
    if count == 0 {
        return Err(Error::ZeroCount);
    }

    let guard = BatchGuard::new();
    let start = Instant::now();

    let generated = if let Some(output) = output {
        let file = OpenOptions::new().create(true).append(true).open(output)?;
        let mut writer = BufWriter::new(file);
        let mut pb = tqdm!(total = count, desc = "Generating");
        let generated =
            write_passwords(generator, mode, count, &mut writer, || {
                pb.update(1)?;
                Ok(())
            })?;
        pb.clear()?;
        generated
    } else {
        let mut stdout = io::stdout().lock();
        write_passwords(generator, mode, count, &mut stdout, || Ok(()))?
    };

    let summary = BatchSummary {
        generated,
        cancelled: guard.is_cancelled(),
        elapsed: start.elapsed(),
    };

    tracing::debug!(
        mode = %mode,
        requested = count,
        generated = summary.generated,
        cancelled = summary.cancelled,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "batch",
    );

    Ok(summary)
}

/// Write passwords one per line until the count is reached
/// or the batch is cancelled.
fn write_passwords<R: RandomSource, W: Write>(
    generator: &PasswordGenerator<R>,
    mode: Mode,
    count: usize,
    writer: &mut W,
    mut progress: impl FnMut() -> Result<()>,
) -> Result<usize> {
    let mut generated = 0;
    while generated < count && !BATCH_CANCELLED.load(Ordering::SeqCst) {
        writeln!(writer, "{}", generator.generate(mode)?)?;
        generated += 1;
        progress()?;
    }
    writer.flush()?;
    Ok(generated)
}
