//! Runtime layer between the backend client and the presentation layer.
//!
//! - [`HumidityViewState`] owns the one-shot fetch and publishes read-only state
//! - [`WateringToggle`] applies the watering rule and sends activation commands
//! - [`Config`] resolves the data directory and loads `config.toml`

pub mod config;
pub mod error;
pub mod notification;
pub mod view_state;
pub mod watering;

pub use config::{ApiSection, CONFIG_FILE, Config, DisplaySection, resolve_data_dir};
pub use error::{Error, Result};
pub use notification::{DEFAULT_TTL, Notification, NotificationLevel};
pub use view_state::{FetchPhase, HumidityViewState, ViewSnapshot};
pub use watering::{
    WATERING_THRESHOLD, WateringToggle, current_humidity, send_activation, watering_permitted,
};
