//! # Presentation Layer
//!
//! Turns runtime state into something a person (or a script) can read.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!                                                       console text / JSON / ratatui
//! ```
//!
//! ### `view_models/`
//! Plain `Serialize` structs. The JSON output of every console command is a
//! `CommandResultViewModel<T>` envelope around one of them.
//!
//! ### `presenters/`
//! Pure functions from runtime types (`ViewSnapshot`, `Notification`, `Config`)
//! to view models. Ordering, rounding labels and gauge colours are decided here.
//!
//! ### `views/`
//! `fmt::Display` wrappers used for plain-text output.
//!
//! ### `renderers/`
//! `ConsoleRenderer` (text or pretty JSON) and the ratatui dashboard.
//!
//! ### `formatters/`
//! Small shared helpers (humidity labels, gauge colour, text bars).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
