//! Client for the PlantBender backend.
//!
//! The backend exposes exactly two operations:
//! - `GET  <base>/HttpTrigger1?code=<records_code>` returns the humidity history
//! - `POST <base>/HttpTrigger2?code=<activation_code>` switches the watering relay
//!
//! [`PlantApi`] is the seam the runtime and the CLI depend on; [`HttpPlantApi`]
//! is the reqwest-backed implementation.

pub mod config;
pub mod error;
pub mod http;
pub mod traits;

pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
pub use http::HttpPlantApi;
pub use traits::PlantApi;

pub use reqwest::StatusCode;
