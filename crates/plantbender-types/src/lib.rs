pub mod activation;
pub mod error;
pub mod percentage;
pub mod record;
pub mod wire;

pub use activation::Activation;
pub use error::{Error, Result};
pub use percentage::{DEFAULT_SCALE_MAX, Normalization, Percentage};
pub use record::{DATE_PATTERN, HumidityRecord, TIME_PATTERN};
pub use wire::{decode_records, parse_instant};
