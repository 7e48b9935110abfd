// NOTE: plantbender Architecture
//
// Layers (each crate only depends on the ones to its left):
//   types -> client -> runtime -> cli
//
// - The client knows the two backend endpoints and nothing about display.
// - The runtime owns the one-shot fetch (HumidityViewState) and the watering rule.
// - The CLI turns runtime state into view models and renders them as text,
//   JSON, or the ratatui dashboard.
//
// A failed fetch is never an error at the presentation layer: it shows up as
// an empty history. Only explicit commands (`water`, `config`) exit non-zero.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, WaterAction};
pub use commands::run;
