//! Record models
//!
//! Each model validates and normalizes one JSON object from the API
//! into typed fields, keeping the raw payload alongside.
//!
//! Upstream data is inconsistent: numbers arrive as strings, strings
//! arrive as null, and optional keys go missing. The lenient field
//! parsers in `de` absorb those differences so a record only fails to
//! build when a field it cannot do without is unusable.

mod de;
mod drone;
mod equipment;
mod flight;
mod place;
mod project;

pub use de::lenient_bool;
pub use drone::Drone;
pub use equipment::Equipment;
pub use flight::Flight;
pub use place::Place;
pub use project::Project;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Split a free-text notes field into lines
pub(crate) fn split_notes(notes: &str) -> Vec<String> {
    notes.lines().map(str::to_string).collect()
}

/// Deserialize a wire struct, reporting failures as malformed records
pub(crate) fn parse_record<T: DeserializeOwned>(kind: &str, value: &Value) -> Result<T> {
    if !value.is_object() {
        return Err(Error::malformed(format!("{kind} record is not a JSON object")));
    }
    <T as serde::Deserialize>::deserialize(value)
        .map_err(|e| Error::malformed(format!("{kind} record: {e}")))
}

#[cfg(test)]
mod tests;
