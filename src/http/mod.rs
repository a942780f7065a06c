//! HTTP client module
//!
//! A thin wrapper over `reqwest` used by every fetcher.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths resolve against one base URL
//! - **Default headers**: credentials attached to every request
//! - **Timeouts**: one per-request timeout, reported as its own error kind
//! - **Status policy**: every non-success status becomes `Error::RequestFailed`

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
