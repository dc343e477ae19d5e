use serde::Deserialize;
use thiserror::Error;

use crate::constants::{METERS_PER_DEGREE_LATITUDE, METERS_PER_DEGREE_LONGITUDE};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("bearing undefined: zero east-west displacement")]
pub struct BearingUndefined;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WorldPosition {
    pub latitude: f64,  // degrees, north positive
    pub longitude: f64, // degrees, east positive
    #[serde(default)]
    pub altitude: f64, // meters above sea level
}

impl WorldPosition {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        WorldPosition {
            latitude,
            longitude,
            altitude,
        }
    }
}

// Ground distance in meters under the local flat-Earth approximation.
// Altitude does not contribute.
pub fn range(start: &WorldPosition, end: &WorldPosition) -> f64 {
    let dy = (end.latitude - start.latitude) * METERS_PER_DEGREE_LATITUDE;
    let dx = (end.longitude - start.longitude) * METERS_PER_DEGREE_LONGITUDE;
    (dy.powi(2) + dx.powi(2)).sqrt()
}

// Compass bearing in radians, [0, 2*pi). Single-argument arctangent form
// pi/2 - atan(dy/dx): undefined when the east-west displacement is zero,
// and west-of-start endpoints fold onto easterly bearings. Both quirks are
// part of the reported output.
pub fn bearing(start: &WorldPosition, end: &WorldPosition) -> Result<f64, BearingUndefined> {
    let dy = (end.latitude - start.latitude) * METERS_PER_DEGREE_LATITUDE;
    let dx = (end.longitude - start.longitude) * METERS_PER_DEGREE_LONGITUDE;

    if dx == 0.0 {
        return Err(BearingUndefined);
    }

    let raw = std::f64::consts::FRAC_PI_2 - (dy / dx).atan();
    Ok(raw.rem_euclid(std::f64::consts::TAU))
}
