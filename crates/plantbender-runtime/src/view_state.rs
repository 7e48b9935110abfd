//! One-shot view-state holder.
//!
//! `HumidityViewState` performs exactly one `fetch_records()` per instance and
//! publishes the outcome through two watch cells. The holder's task is the only
//! writer; everything handed out is a read-only receiver.
//!
//! ```text
//! spawn() --> [ loading ] --fetch ok, non-empty--> [ loaded ]
//!                   |
//!                   +--error / empty / cancelled--> [ empty ]
//! ```

use std::sync::Arc;

use plantbender_client::{ApiError, PlantApi};
use plantbender_types::HumidityRecord;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub type RecordList = Arc<[HumidityRecord]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Loading,
    Loaded,
    Empty,
}

/// Point-in-time copy of both cells.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub records: RecordList,
    pub is_loading: bool,
}

impl ViewSnapshot {
    /// Most recent sample (last in backend order).
    pub fn latest(&self) -> Option<&HumidityRecord> {
        self.records.last()
    }

    /// Records for display, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &HumidityRecord> {
        self.records.iter().rev()
    }

    pub fn phase(&self) -> FetchPhase {
        if self.is_loading {
            FetchPhase::Loading
        } else if self.records.is_empty() {
            FetchPhase::Empty
        } else {
            FetchPhase::Loaded
        }
    }
}

pub struct HumidityViewState {
    records: watch::Receiver<RecordList>,
    loading: watch::Receiver<bool>,
    cancel: CancellationToken,
}

impl HumidityViewState {
    /// Start the fetch. Must be called from within a tokio runtime.
    pub fn spawn<A>(api: Arc<A>) -> Self
    where
        A: PlantApi + ?Sized + 'static,
    {
        let (records_tx, records_rx) = watch::channel::<RecordList>(Arc::from(Vec::new()));
        let (loading_tx, loading_rx) = watch::channel(false);
        let cancel = CancellationToken::new();

        loading_tx.send_replace(true);

        let token = cancel.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => None,
                result = api.fetch_records() => Some(result),
            };

            match outcome {
                Some(Ok(records)) => {
                    info!(count = records.len(), "humidity records loaded");
                    records_tx.send_replace(Arc::from(records));
                }
                Some(Err(err)) => {
                    log_fetch_failure(&err);
                    records_tx.send_replace(Arc::from(Vec::new()));
                }
                None => debug!("humidity fetch cancelled"),
            }

            loading_tx.send_replace(false);
        });

        Self {
            records: records_rx,
            loading: loading_rx,
            cancel,
        }
    }

    pub fn records(&self) -> watch::Receiver<RecordList> {
        self.records.clone()
    }

    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading.clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        // Read loading first: records are always published before loading clears.
        let is_loading = *self.loading.borrow();
        let records = self.records.borrow().clone();
        ViewSnapshot {
            records,
            is_loading,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        self.snapshot().phase()
    }

    /// Resolves once the fetch has finished (or was cancelled).
    pub async fn wait_until_loaded(&self) -> ViewSnapshot {
        let mut loading = self.loading.clone();
        if loading.wait_for(|is_loading| !*is_loading).await.is_err() {
            warn!("humidity fetch task ended without clearing the loading flag");
        }
        self.snapshot()
    }

    /// Abort an in-flight fetch. Records stay as they are.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for HumidityViewState {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn log_fetch_failure(err: &ApiError) {
    match err {
        ApiError::Network(reason) => warn!(%reason, "humidity fetch failed: network"),
        ApiError::Status(status) => warn!(%status, "humidity fetch rejected"),
        ApiError::Decode(reason) => error!(%reason, "humidity payload could not be decoded"),
        ApiError::InvalidUrl(_) | ApiError::Config(_) => error!(error = %err, "humidity fetch misconfigured"),
    }
}
