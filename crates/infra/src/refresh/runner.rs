use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use fleamarket_catalog::{CatalogStore, MarketIndex};

use super::error::RefreshError;
use super::pass::{MarketRefresher, RefreshReport};

/// Handle for a running refresh runner.
#[derive(Debug)]
pub struct RefreshRunnerHandle {
    shutdown: mpsc::Sender<()>,
    last_report: Arc<Mutex<Option<RefreshReport>>>,
    join: Option<thread::JoinHandle<Result<(), RefreshError>>>,
}

impl RefreshRunnerHandle {
    /// Report of the most recently completed pass.
    pub fn last_report(&self) -> Option<RefreshReport> {
        self.last_report.lock().ok().and_then(|r| r.clone())
    }

    /// Stop the runner between passes and wait for it.
    ///
    /// A pass in progress always completes first.
    pub fn shutdown(mut self) -> Result<(), RefreshError> {
        let _ = self.shutdown.send(());
        self.wait()
    }

    /// Wait for the runner to finish on its own: immediately when reruns are
    /// disabled, otherwise only once a rerun fails.
    pub fn join(mut self) -> Result<(), RefreshError> {
        self.wait()
    }

    fn wait(&mut self) -> Result<(), RefreshError> {
        match self.join.take() {
            Some(j) => j.join().map_err(|_| RefreshError::RunnerPanicked)?,
            None => Ok(()),
        }
    }
}

/// Runs refresh passes: the first on the caller's thread, reruns on a dedicated one.
///
/// - [`spawn`](Self::spawn) runs one pass to completion before returning; its
///   failure is returned directly and nothing is scheduled.
/// - If the config has a positive rerun interval, a named thread waits that long
///   after each completed pass (write-back and index signals included), then
///   runs again, forever. Passes never overlap.
/// - A failing rerun stops the thread; the error is returned from
///   [`RefreshRunnerHandle::join`] / [`RefreshRunnerHandle::shutdown`].
///
/// Dropping the handle detaches the runner; it keeps rerunning.
#[derive(Debug, Clone)]
pub struct RefreshRunner;

impl RefreshRunner {
    pub fn spawn<C, M>(
        name: &'static str,
        refresher: Arc<MarketRefresher<C, M>>,
    ) -> Result<RefreshRunnerHandle, RefreshError>
    where
        C: CatalogStore,
        M: MarketIndex,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let first = refresher.run_pass()?;
        let last_report = Arc::new(Mutex::new(Some(first)));

        let Some(interval) = refresher.config().rerun_interval() else {
            return Ok(RefreshRunnerHandle {
                shutdown: shutdown_tx,
                last_report,
                join: None,
            });
        };

        info!(runner = name, "Re-running in {} seconds...", interval.as_secs_f64());
        let report_slot = last_report.clone();
        let join = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || rerun_loop(name, refresher, interval, shutdown_rx, report_slot))?;

        Ok(RefreshRunnerHandle {
            shutdown: shutdown_tx,
            last_report,
            join: Some(join),
        })
    }
}

fn rerun_loop<C, M>(
    name: &'static str,
    refresher: Arc<MarketRefresher<C, M>>,
    interval: Duration,
    shutdown_rx: mpsc::Receiver<()>,
    report_slot: Arc<Mutex<Option<RefreshReport>>>,
) -> Result<(), RefreshError>
where
    C: CatalogStore,
    M: MarketIndex,
{
    info!(runner = name, "market refresh runner started");

    loop {
        match shutdown_rx.recv_timeout(interval) {
            Ok(()) => break,
            Err(RecvTimeoutError::Timeout) => {}
            // Handle dropped: nobody can stop us any more, keep the cadence.
            Err(RecvTimeoutError::Disconnected) => thread::sleep(interval),
        }

        let report = match refresher.run_pass() {
            Ok(r) => r,
            Err(e) => {
                warn!(runner = name, error = %e, "market refresh pass failed; runner stopping");
                return Err(e);
            }
        };
        if let Ok(mut slot) = report_slot.lock() {
            *slot = Some(report);
        }

        info!(runner = name, "Re-running in {} seconds...", interval.as_secs_f64());
    }

    info!(runner = name, "market refresh runner stopped");
    Ok(())
}
