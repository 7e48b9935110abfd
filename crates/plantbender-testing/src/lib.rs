//! Testing infrastructure for plantbender integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `MockApi`: scripted in-process `PlantApi` with call recording
//! - `MockServer`: local HTTP backend serving both endpoints
//! - `fixtures`: sample record payloads
//! - `assertions`: JSON output checks for CLI tests
//! - `TestWorld`: isolated data directory and CLI runner

pub mod assertions;
pub mod fixtures;
pub mod mock_api;
pub mod server;
pub mod world;

pub use mock_api::{FetchScript, MockApi};
pub use server::{MockServer, ReceivedActivation};
pub use world::{CliResult, TestWorld};
