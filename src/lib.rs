//! # dronelogbook
//!
//! Client library for the DroneLogBook flight-logging API.
//!
//! ## Features
//!
//! - **Typed records**: Flight, Drone, Place, Project and Equipment parsed from
//!   the API's JSON, tolerant of numbers-as-strings and missing fields
//! - **Hydration**: resolve a flight's drone, place, project and equipment
//! - **Pagination**: walk every page of a listing with a hard page cap
//! - **Log download**: fetch original binary flight logs to memory or disk
//! - **Elevation**: replace a place's altitude with the USGS ground elevation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dronelogbook::{DroneLogBook, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads ~/.cass-keys
//!     let client = DroneLogBook::from_default_credentials()?;
//!
//!     let flight = client.get_flight(Some("flight-guid"), true).await?;
//!     if let Some(flight) = flight {
//!         println!("{flight}");
//!     }
//!
//!     let scoops = client.get_scoops().await?;
//!     for scoop in &scoops {
//!         println!("{}: {:?}", scoop.name, scoop.sensor_serials());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DroneLogBook                          │
//! │  get_flight(hydrate)  get_flights(page, hydrate)  download   │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┴──┬──────────────┬──────────────┐
//! │  Fetchers  │    Hydration      │  Pagination  │  Elevation   │
//! ├────────────┼───────────────────┼──────────────┼──────────────┤
//! │ drone      │ drone → place →   │ num_page=N   │ USGS EPQS    │
//! │ place      │ project →         │ has_more     │              │
//! │ equipment  │ equipment[]       │ page cap     │              │
//! │ project    │                   │              │              │
//! └────────────┴───────────────────┴──────────────┴──────────────┘
//!                               │
//!                  HTTP client (reqwest) → Record models
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Credentials and client configuration
pub mod config;

/// HTTP client with uniform status handling
pub mod http;

/// Record models
pub mod models;

/// Page-number pagination
pub mod pagination;

/// DroneLogBook API client
pub mod client;

/// USGS elevation lookup
pub mod elevation;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{DroneLogBook, Entity};
pub use config::{ClientConfig, Credentials};
pub use elevation::{ElevationClient, ElevationUpdate};
pub use error::{Error, Relation, Result};
pub use models::{Drone, Equipment, Flight, Place, Project};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
