//! CLI module
//!
//! Command-line interface over the client operations.
//!
//! # Commands
//!
//! - `flight` / `flights` - Fetch one flight or list all flights
//! - `drone` / `drones` - Fetch one drone or list all drones
//! - `place` - Fetch one place, optionally with USGS ground elevation
//! - `equipment` / `scoops` - Fetch equipment or list all scoops
//! - `download` - Download an original flight log

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
