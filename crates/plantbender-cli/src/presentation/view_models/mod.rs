pub mod common;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod result;
pub mod status;
pub mod water;

pub use common::{GaugeViewModel, Guidance, RgbColor, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use dashboard::{DashboardViewModel, NotificationViewModel, ToggleViewModel};
pub use history::{HistoryViewModel, HumidityRowViewModel, HumidityUnit};
pub use result::CommandResultViewModel;
pub use status::StatusViewModel;
pub use water::WaterViewModel;
