use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) mod batch;
pub(crate) mod readline;

pub use wordpass_cli_helpers::messages;

/// Is a batch of passwords being generated?
///
/// Used for ctrlc handling to stop the batch rather
/// than quitting the program.
pub(crate) static BATCH_RUNNING: AtomicBool = AtomicBool::new(false);

/// Set when the running batch should stop.
pub(crate) static BATCH_CANCELLED: AtomicBool = AtomicBool::new(false);

/// Install the interrupt handler.
pub(crate) fn set_interrupt_handler() -> crate::Result<()> {
    ctrlc::set_handler(move || {
        if BATCH_RUNNING.load(Ordering::SeqCst) {
            BATCH_CANCELLED.store(true, Ordering::SeqCst);
        } else {
            std::process::exit(1);
        }
    })?;
    Ok(())
}
