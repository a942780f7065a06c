//! DroneLogBook API client
//!
//! `DroneLogBook` owns the credentials and issues every request. Each
//! call is awaited to completion before the next one starts: listing
//! walks pages one after another and hydration resolves relations in
//! a fixed order (drone, place, project, equipment).
//!
//! Fetchers take an optional identifier. A missing or blank identifier
//! is not an error; the fetcher returns `Ok(None)` without touching the
//! network.

mod dronelogbook;
mod download;
mod hydrate;

pub use dronelogbook::{DroneLogBook, Entity};
