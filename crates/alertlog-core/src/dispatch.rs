//! Background execution of webhook deliveries.
//!
//! Logging calls are synchronous, deliveries are async. Inside a Tokio
//! runtime the delivery is spawned on it; otherwise a short-lived thread
//! drives it on a current-thread runtime.

use alertlog_types::{AlertlogError, Result};
use std::cell::Cell;
use std::future::Future;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tokio::runtime::{Builder, Handle, Runtime};

const THREAD_NAME: &str = "alertlog-notify";

/// Extra time granted to the delivery thread to start its runtime.
const STARTUP_GRACE: Duration = Duration::from_millis(250);

thread_local! {
    /// Set on helper threads. Their runtime is dropped as soon as the
    /// delivery it drives returns, taking any task spawned on it along.
    static ON_HELPER: Cell<bool> = Cell::new(false);
}

fn runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AlertlogError::Runtime(format!("Failed to start runtime: {}", e)))
}

/// Run `task` in the background without waiting for it.
pub(crate) fn spawn<F>(task: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if !ON_HELPER.with(Cell::get) {
        if let Ok(handle) = Handle::try_current() {
            handle.spawn(task);
            return Ok(());
        }
    }

    thread::Builder::new()
        .name(THREAD_NAME.to_string())
        .spawn(move || {
            ON_HELPER.with(|flag| flag.set(true));
            match runtime() {
                Ok(rt) => rt.block_on(task),
                Err(e) => tracing::warn!(error = %e, "dropping notification"),
            }
        })?;

    Ok(())
}

/// Run `task` on a dedicated thread and wait at most `wait` for its result.
///
/// The thread is left behind on timeout; callers use this right before
/// terminating the process.
pub(crate) fn run_bounded<F>(task: F, wait: Duration) -> Result<()>
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let millis = wait.as_millis() as u64;

    thread::Builder::new()
        .name(THREAD_NAME.to_string())
        .spawn(move || {
            let result = runtime().and_then(|rt| {
                rt.block_on(async move {
                    tokio::time::timeout(wait, task)
                        .await
                        .unwrap_or(Err(AlertlogError::Timeout(millis)))
                })
            });
            let _ = tx.send(result);
        })?;

    rx.recv_timeout(wait + STARTUP_GRACE)
        .unwrap_or(Err(AlertlogError::Timeout(millis)))
}
