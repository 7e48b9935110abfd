pub mod config;
pub mod dashboard;
pub mod history;
pub mod status;
pub mod water;

pub use config::{present_config_saved, present_config_show};
pub use dashboard::build_dashboard_view_model;
pub use history::{present_history, present_row, present_rows};
pub use status::{present_gauge, present_status};
pub use water::present_water;
