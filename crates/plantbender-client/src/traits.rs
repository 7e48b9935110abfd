use std::sync::Arc;

use futures::future::BoxFuture;
use plantbender_types::{Activation, HumidityRecord};

use crate::error::Result;

/// Remote operations of the PlantBender backend.
///
/// Responsibilities:
/// - Fetch the full humidity history in backend order (oldest first)
/// - Switch the watering relay on or off
///
/// Implementations never retry; each call is exactly one request.
pub trait PlantApi: Send + Sync {
    /// GET the humidity history. Any non-2xx status is an error.
    fn fetch_records(&self) -> BoxFuture<'_, Result<Vec<HumidityRecord>>>;

    /// POST an activation command. Success is decided by status class only.
    fn send_activation(&self, activation: Activation) -> BoxFuture<'_, Result<()>>;
}

impl<T: PlantApi + ?Sized> PlantApi for Arc<T> {
    fn fetch_records(&self) -> BoxFuture<'_, Result<Vec<HumidityRecord>>> {
        (**self).fetch_records()
    }

    fn send_activation(&self, activation: Activation) -> BoxFuture<'_, Result<()>> {
        (**self).send_activation(activation)
    }
}
