// Geodetic Constants
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_325.0; // m per degree of latitude
pub const METERS_PER_DEGREE_LONGITUDE: f64 = 111_050.0; // m per degree of longitude at the equator

// Perturbation Defaults
pub const DEFAULT_ROD_ANGLE_MEAN: f64 = 45.0; // degrees from vertical
pub const DEFAULT_ROD_ANGLE_STD: f64 = 5.0; // degrees
pub const DEFAULT_ROD_DIRECTION_MEAN: f64 = 0.0; // degrees clockwise from north
pub const DEFAULT_ROD_DIRECTION_STD: f64 = 5.0; // degrees
pub const DEFAULT_WIND_SPEED_MEAN: f64 = 15.0; // m/s
pub const DEFAULT_WIND_SPEED_STD: f64 = 5.0; // m/s

// Batch Parameters
pub const DEFAULT_TRIAL_COUNT: usize = 20;
