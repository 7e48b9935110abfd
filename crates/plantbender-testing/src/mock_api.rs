//! Scripted in-process backend.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;
use plantbender_client::{ApiError, PlantApi, Result, StatusCode};
use plantbender_types::{Activation, HumidityRecord};
use tokio::sync::Notify;

/// What the next `fetch_records` call returns.
#[derive(Debug, Clone)]
pub enum FetchScript {
    Records(Vec<HumidityRecord>),
    Status(u16),
    Network(String),
    Malformed,
}

/// What `send_activation` calls return.
#[derive(Debug, Clone)]
pub enum ActivationScript {
    Accept,
    Status(u16),
    Network(String),
}

/// [`PlantApi`] that replays scripted outcomes and records every call.
///
/// # Example
/// ```no_run
/// use plantbender_testing::{MockApi, fixtures};
///
/// let api = MockApi::with_records(fixtures::records_from(&fixtures::dry_history()))
///     .reject_activations(503);
/// assert_eq!(api.fetch_calls(), 0);
/// ```
pub struct MockApi {
    fetch: Mutex<FetchScript>,
    activation: Mutex<ActivationScript>,
    fetch_calls: AtomicUsize,
    activations: Mutex<Vec<Activation>>,
    gate: Option<Notify>,
}

impl MockApi {
    fn new(fetch: FetchScript) -> Self {
        Self {
            fetch: Mutex::new(fetch),
            activation: Mutex::new(ActivationScript::Accept),
            fetch_calls: AtomicUsize::new(0),
            activations: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn with_records(records: Vec<HumidityRecord>) -> Self {
        Self::new(FetchScript::Records(records))
    }

    pub fn failing_status(status: u16) -> Self {
        Self::new(FetchScript::Status(status))
    }

    pub fn failing_network(reason: impl Into<String>) -> Self {
        Self::new(FetchScript::Network(reason.into()))
    }

    pub fn malformed() -> Self {
        Self::new(FetchScript::Malformed)
    }

    /// Hold every fetch until [`MockApi::release`] is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn reject_activations(self, status: u16) -> Self {
        *self.activation.lock().unwrap() = ActivationScript::Status(status);
        self
    }

    pub fn drop_activations(self, reason: impl Into<String>) -> Self {
        *self.activation.lock().unwrap() = ActivationScript::Network(reason.into());
        self
    }

    /// Let one gated fetch complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn activations(&self) -> Vec<Activation> {
        self.activations.lock().unwrap().clone()
    }

    async fn scripted_fetch(&self) -> Result<Vec<HumidityRecord>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let script = self.fetch.lock().unwrap().clone();
        match script {
            FetchScript::Records(records) => Ok(records),
            FetchScript::Status(code) => Err(ApiError::Status(status(code))),
            FetchScript::Network(reason) => Err(ApiError::Network(reason)),
            FetchScript::Malformed => Err(ApiError::Decode(
                "invalid type: map, expected a sequence".to_string(),
            )),
        }
    }

    async fn scripted_activation(&self, activation: Activation) -> Result<()> {
        self.activations.lock().unwrap().push(activation);

        let script = self.activation.lock().unwrap().clone();
        match script {
            ActivationScript::Accept => Ok(()),
            ActivationScript::Status(code) => Err(ApiError::Status(status(code))),
            ActivationScript::Network(reason) => Err(ApiError::Network(reason)),
        }
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl PlantApi for MockApi {
    fn fetch_records(&self) -> BoxFuture<'_, Result<Vec<HumidityRecord>>> {
        self.scripted_fetch().boxed()
    }

    fn send_activation(&self, activation: Activation) -> BoxFuture<'_, Result<()>> {
        self.scripted_activation(activation).boxed()
    }
}
