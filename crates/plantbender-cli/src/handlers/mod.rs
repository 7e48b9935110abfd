mod context;

pub mod config;
pub mod dashboard;
pub mod history;
pub mod status;
pub mod water;

pub use context::HandlerContext;
