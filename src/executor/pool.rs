use crate::executor::outcome::TaskOutcome;
use crate::session::SessionError;
use crate::ui;
use futures::future::join_all;
use log::debug;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error)]
pub enum PoolError {
    /// Operator interrupt: the run is over, no report is produced.
    #[error("run interrupted by operator")]
    Interrupted,

    #[error("worker panicked: {0}")]
    Join(#[from] JoinError),

    #[error("worker pool shut down early: {0}")]
    Semaphore(#[from] AcquireError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Concurrency bound for a run: capped at 100 simultaneous sessions, and at
/// least 2 slots even for very small device lists.
pub fn pool_size(device_count: usize) -> usize {
    device_count.clamp(2, 100)
}

/// Dispatches one task per device, bounded by a semaphore sized with
/// [`pool_size`], and collects every outcome. Cancellation is observed only
/// here; the per-device futures never see the token.
pub struct WorkerPool {
    cancel: CancellationToken,
}

impl WorkerPool {
    pub fn new(cancel: CancellationToken) -> Self {
        WorkerPool { cancel }
    }

    pub async fn run<F, Fut>(
        &self,
        devices: &[String],
        task: F,
    ) -> Result<Vec<TaskOutcome>, PoolError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<TaskOutcome, SessionError>> + Send + 'static,
    {
        // Nothing to evaluate; don't bother standing up a pool.
        if devices.is_empty() {
            return Ok(Vec::new());
        }

        let limit = pool_size(devices.len());
        debug!("dispatching {} device(s), {} slots", devices.len(), limit);
        let semaphore = Arc::new(Semaphore::new(limit));

        let handles: Vec<_> = devices
            .iter()
            .map(|device| {
                let semaphore = Arc::clone(&semaphore);
                let fut = task(device.clone());
                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await?;
                    fut.await.map_err(PoolError::from)
                })
            })
            .collect();
        let aborts: Vec<_> = handles.iter().map(|h| h.abort_handle()).collect();

        let joined = tokio::select! {
            _ = self.cancel.cancelled() => {
                println!();
                ui::error("Caught CTRL-C, bailing");
                for abort in &aborts {
                    abort.abort();
                }
                return Err(PoolError::Interrupted);
            }
            joined = join_all(handles) => joined,
        };

        let mut outcomes = Vec::with_capacity(joined.len());
        for result in joined {
            outcomes.push(result??);
        }
        Ok(outcomes)
    }
}
