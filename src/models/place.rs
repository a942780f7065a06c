//! Place record

use super::de::{f64_lenient, f64_or_zero, string_or_default};
use super::parse_record;
use crate::elevation::{ElevationClient, ElevationUpdate};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A flight location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub guid: String,
    /// Altitude in meters; replaced by [`Place::refresh_altitude`]
    pub altitude: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub address: String,
    #[serde(skip)]
    pub raw: Value,
}

#[derive(Deserialize)]
struct PlaceWire {
    guid: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    altitude: f64,
    #[serde(deserialize_with = "f64_lenient")]
    latitude: f64,
    #[serde(deserialize_with = "f64_lenient")]
    longitude: f64,
    #[serde(default, deserialize_with = "string_or_default")]
    name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    address: String,
}

impl Place {
    /// Build a place from one element of the API `data` array
    pub fn from_json(value: &Value) -> Result<Self> {
        let wire: PlaceWire = parse_record("place", value)?;
        Ok(Self {
            guid: wire.guid,
            altitude: wire.altitude,
            latitude: wire.latitude,
            longitude: wire.longitude,
            name: wire.name,
            address: wire.address,
            raw: value.clone(),
        })
    }

    /// Replace the altitude with the USGS ground elevation at this place
    ///
    /// A non-success status from the elevation service is not fatal:
    /// the altitude is left as it was and the outcome says why.
    pub async fn refresh_altitude(&mut self, elevation: &ElevationClient) -> Result<ElevationUpdate> {
        match elevation.query(self.longitude, self.latitude).await {
            Ok(altitude) => {
                self.altitude = altitude;
                Ok(ElevationUpdate::Updated { altitude })
            }
            Err(Error::RequestFailed { status, .. }) => {
                warn!(
                    "Elevation query for place {} failed with status {}, keeping altitude {}",
                    self.guid, status, self.altitude
                );
                Ok(ElevationUpdate::Unchanged {
                    status,
                    altitude: self.altitude,
                })
            }
            Err(e) => Err(e),
        }
    }
}
