//! GPS location model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A GPS fix captured alongside an observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy in meters, when the fix reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    /// Altitude in meters, when the fix reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl GeoPoint {
    /// Create a validated point. Latitude and longitude must be finite and
    /// within range; accuracy and altitude must be finite when present.
    pub fn new(
        latitude: f64,
        longitude: f64,
        accuracy: Option<f64>,
        altitude: Option<f64>,
    ) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidInput(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidInput(format!(
                "longitude out of range: {longitude}"
            )));
        }
        for (label, value) in [("accuracy", accuracy), ("altitude", altitude)] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(Error::InvalidInput(format!("{label} must be finite")));
                }
            }
        }

        Ok(Self {
            latitude,
            longitude,
            accuracy,
            altitude,
        })
    }

    /// Parse a `"lat,lon"` pair as entered on the command line.
    pub fn parse_lat_lon(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, ',');
        let latitude = parts.next().unwrap_or("").trim();
        let longitude = parts.next().unwrap_or("").trim();

        let latitude = latitude
            .parse::<f64>()
            .map_err(|_| Error::InvalidInput(format!("invalid latitude: {latitude:?}")))?;
        let longitude = longitude
            .parse::<f64>()
            .map_err(|_| Error::InvalidInput(format!("invalid longitude: {longitude:?}")))?;

        Self::new(latitude, longitude, None, None)
    }
}
