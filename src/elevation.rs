//! USGS elevation point query service
//!
//! Used to replace a place's logged altitude with the ground elevation
//! at its coordinates.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const QUERY_PATH: &str = "/epqs/pqs.php";

/// Outcome of [`crate::models::Place::refresh_altitude`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ElevationUpdate {
    /// Altitude replaced with the queried elevation
    Updated { altitude: f64 },
    /// Service answered with a non-success status; altitude kept
    Unchanged { status: u16, altitude: f64 },
}

impl ElevationUpdate {
    /// Altitude after the refresh
    pub fn altitude(&self) -> f64 {
        match self {
            ElevationUpdate::Updated { altitude } | ElevationUpdate::Unchanged { altitude, .. } => {
                *altitude
            }
        }
    }

    /// Whether the altitude changed
    pub fn is_updated(&self) -> bool {
        matches!(self, ElevationUpdate::Updated { .. })
    }
}

/// Client for the elevation point query service
#[derive(Debug)]
pub struct ElevationClient {
    http: HttpClient,
}

impl ElevationClient {
    /// Create a client against the given service base URL
    pub fn new(base_url: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .base_url(base_url)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .header("accept", "application/json")
            .build();

        Ok(Self {
            http: HttpClient::with_config(http_config)?,
        })
    }

    /// Create a client from the elevation URL of a client config
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.elevation_url.clone(), config)
    }

    /// Ground elevation in meters at the given coordinates
    pub async fn query(&self, longitude: f64, latitude: f64) -> Result<f64> {
        debug!("Querying elevation at x={longitude} y={latitude}");
        let body: Value = self
            .http
            .get_json_with_config(
                QUERY_PATH,
                RequestConfig::new()
                    .query("x", longitude.to_string())
                    .query("y", latitude.to_string())
                    .query("units", "Meters")
                    .query("output", "json"),
            )
            .await?;

        extract_elevation(&body)
    }
}

/// Read `USGS_Elevation_Point_Query_Service.Elevation_Query.Elevation`
fn extract_elevation(body: &Value) -> Result<f64> {
    let elevation = body
        .pointer("/USGS_Elevation_Point_Query_Service/Elevation_Query/Elevation")
        .ok_or_else(|| Error::malformed("elevation response has no Elevation value"))?;

    match elevation {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::malformed(format!("elevation {n} is not a float"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| Error::malformed(format!("elevation '{s}' is not a number"))),
        other => Err(Error::malformed(format!(
            "elevation has unexpected type: {other}"
        ))),
    }
}
