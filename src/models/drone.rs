//! Drone record

use super::de::string_or_default;
use super::{parse_record, split_notes};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An aircraft registered in the logbook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drone {
    pub guid: String,
    pub brand: String,
    pub model: String,
    /// Registration or serial identification number
    pub id_number: String,
    /// Free-text notes, one entry per line
    pub notes: Vec<String>,
    #[serde(skip)]
    pub raw: Value,
}

#[derive(Deserialize)]
struct DroneWire {
    guid: String,
    #[serde(default, deserialize_with = "string_or_default")]
    brand: String,
    #[serde(default, deserialize_with = "string_or_default")]
    model: String,
    #[serde(default, deserialize_with = "string_or_default")]
    identification_number: String,
    #[serde(default, deserialize_with = "string_or_default")]
    notes: String,
}

impl Drone {
    /// Build a drone from one element of the API `data` array
    pub fn from_json(value: &Value) -> Result<Self> {
        let wire: DroneWire = parse_record("drone", value)?;
        Ok(Self {
            guid: wire.guid,
            brand: wire.brand,
            model: wire.model,
            id_number: wire.identification_number,
            notes: split_notes(&wire.notes),
            raw: value.clone(),
        })
    }
}

impl fmt::Display for Drone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.brand, self.model, self.id_number)
    }
}
