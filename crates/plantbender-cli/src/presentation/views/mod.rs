pub mod config;
pub mod history;
pub mod status;
pub mod water;

pub use config::ConfigView;
pub use history::HistoryView;
pub use status::StatusView;
