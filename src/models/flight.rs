//! Flight record
//!
//! Flights order by launch time. Two flights with the same launch time
//! compare equal regardless of their other fields.

use super::de::{guid_list, optional_guid, string_or_default, u64_lenient};
use super::{parse_record, Drone, Equipment, Place, Project};
use crate::error::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// Upstream timestamp layout, e.g. `2020-01-01T00:00:00.000Z`
const FLIGHT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// A logged flight
#[derive(Debug, Clone, Serialize)]
pub struct Flight {
    pub guid: String,
    pub personnel: String,
    pub weather: String,
    pub duration_seconds: u64,
    pub place_name: String,
    pub drone_guid: Option<String>,
    pub place_guid: Option<String>,
    pub project_guid: Option<String>,
    pub equipment_guids: Vec<String>,
    /// Launch time; the Unix epoch when the upstream value was unusable
    pub flight_time: DateTime<Utc>,
    /// Why `flight_time` fell back to the epoch, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_time_defect: Option<String>,

    // Populated by hydration
    pub drone: Option<Drone>,
    pub place: Option<Place>,
    pub project: Option<Project>,
    pub equipment: Vec<Equipment>,

    #[serde(skip)]
    pub raw: Value,
}

#[derive(Deserialize)]
struct FlightWire {
    guid: String,
    #[serde(default, deserialize_with = "string_or_default")]
    personnel: String,
    #[serde(default, deserialize_with = "string_or_default")]
    weather_detail: String,
    #[serde(default, deserialize_with = "u64_lenient")]
    duration_seconds: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    place_name: String,
    #[serde(default, deserialize_with = "optional_guid")]
    drone_guid: Option<String>,
    #[serde(default, deserialize_with = "optional_guid")]
    place_guid: Option<String>,
    #[serde(default, deserialize_with = "optional_guid")]
    project_guid: Option<String>,
    #[serde(default, deserialize_with = "guid_list")]
    equipments: Vec<String>,
    #[serde(default)]
    flight_date_utc: Option<Value>,
}

impl Flight {
    /// Build a flight from one element of the API `data` array
    ///
    /// An unusable `flight_date_utc` does not fail the record: the
    /// launch time becomes the epoch and the defect is kept on the flight.
    pub fn from_json(value: &Value) -> Result<Self> {
        let wire: FlightWire = parse_record("flight", value)?;

        let (flight_time, flight_time_defect) = match parse_flight_time(wire.flight_date_utc.as_ref()) {
            Ok(time) => (time, None),
            Err(defect) => {
                warn!("Error decoding time in flight {}: {}", wire.guid, defect);
                (epoch(), Some(defect))
            }
        };

        Ok(Self {
            guid: wire.guid,
            personnel: wire.personnel,
            weather: wire.weather_detail,
            duration_seconds: wire.duration_seconds,
            place_name: wire.place_name,
            drone_guid: wire.drone_guid,
            place_guid: wire.place_guid,
            project_guid: wire.project_guid,
            equipment_guids: wire.equipments,
            flight_time,
            flight_time_defect,
            drone: None,
            place: None,
            project: None,
            equipment: Vec::new(),
            raw: value.clone(),
        })
    }

    /// Whether the related records have been fetched
    pub fn is_hydrated(&self) -> bool {
        self.drone.is_some()
            || self.place.is_some()
            || self.project.is_some()
            || !self.equipment.is_empty()
    }
}

/// Fallback launch time, 1970-01-01T00:00:00Z
pub(crate) fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

fn parse_flight_time(value: Option<&Value>) -> std::result::Result<DateTime<Utc>, String> {
    let text = match value {
        Some(Value::String(s)) => s.trim(),
        None | Some(Value::Null) => return Err("flight_date_utc is missing".to_string()),
        Some(other) => return Err(format!("flight_date_utc is not a string: {other}")),
    };

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, FLIGHT_TIME_FORMAT) {
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("cannot parse flight_date_utc '{text}': {e}"))
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.flight_time == other.flight_time
    }
}

impl Eq for Flight {}

impl PartialOrd for Flight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.flight_time.cmp(&other.flight_time)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight launched on {} at location {}",
            self.flight_time, self.place_name
        )?;
        if let Some(project) = &self.project {
            write!(f, " for project {project}")?;
        }
        if let Some(drone) = &self.drone {
            write!(f, " using {drone}")?;
        }
        Ok(())
    }
}
