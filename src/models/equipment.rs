//! Equipment record
//!
//! Scoops are sensor carriers. Their name ends in a label
//! (`"Scoop Alpha-7"`) and their notes list the serial numbers of the
//! mounted iMet and HYT sensors (`"iMet,1234,5678"`).

use super::de::{optional_guid, string_or_default};
use super::{parse_record, split_notes};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A piece of equipment attached to flights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equipment {
    /// Upstream identifier, when the payload carries one
    pub guid: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub notes: Vec<String>,
    /// Last word of the name, set only for scoops
    pub scoop_label: Option<String>,
    /// iMet sensor serials, set only when a note lists them
    pub imet_serials: Option<Vec<String>>,
    /// HYT sensor serials, set only when a note lists them
    pub hyt_serials: Option<Vec<String>>,
    #[serde(skip)]
    pub raw: Value,
}

#[derive(Deserialize)]
struct EquipmentWire {
    #[serde(default, deserialize_with = "optional_guid")]
    guid: Option<String>,
    name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    equipment_type: String,
    #[serde(default, deserialize_with = "string_or_default")]
    notes: String,
}

impl Equipment {
    /// Build equipment from one element of the API `data` array
    pub fn from_json(value: &Value) -> Result<Self> {
        let wire: EquipmentWire = parse_record("equipment", value)?;
        Ok(Self::from_parts(
            wire.guid,
            wire.name,
            wire.equipment_type,
            split_notes(&wire.notes),
            value.clone(),
        ))
    }

    /// Build equipment from already-split fields, deriving scoop data
    pub fn from_parts(
        guid: Option<String>,
        name: String,
        equipment_type: String,
        notes: Vec<String>,
        raw: Value,
    ) -> Self {
        let scoop_label = if name.to_lowercase().contains("scoop") {
            name.split_whitespace().last().map(str::to_string)
        } else {
            None
        };

        let mut imet_serials = None;
        let mut hyt_serials = None;
        for note in &notes {
            let lower = note.to_lowercase();
            // A later qualifying line replaces an earlier one.
            if lower.contains("imet") {
                imet_serials = Some(serials_from_note(note));
            }
            if lower.contains("hyt") {
                hyt_serials = Some(serials_from_note(note));
            }
        }

        Self {
            guid,
            name,
            equipment_type,
            notes,
            scoop_label,
            imet_serials,
            hyt_serials,
            raw,
        }
    }

    /// Whether this equipment is a scoop
    pub fn is_scoop(&self) -> bool {
        self.scoop_label.is_some()
    }

    /// iMet serials followed by HYT serials
    pub fn sensor_serials(&self) -> Vec<String> {
        self.imet_serials
            .iter()
            .chain(self.hyt_serials.iter())
            .flatten()
            .cloned()
            .collect()
    }
}

/// Comma-separated tokens after the leading sensor tag, blanks dropped
fn serials_from_note(note: &str) -> Vec<String> {
    note.split(',')
        .skip(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
