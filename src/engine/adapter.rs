use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dispersion::runner::TrialResult;
use crate::engine::options::SimulationOptions;
use crate::listeners::SimulationListener;
use crate::utils::geodesy::WorldPosition;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Load error: {0}")]
    LoadError(String),

    #[error("No simulation at index {0}")]
    MissingSimulation(usize),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeodeticModel {
    Flat,
    Spherical,
    Wgs84,
}

// Vehicle state handed to listeners at the run boundaries
#[derive(Debug, Clone)]
pub struct FlightState {
    pub launch_site: WorldPosition,
    pub position: WorldPosition,
    pub flight_time: f64, // seconds since liftoff
}

impl FlightState {
    pub fn new(launch_site: WorldPosition) -> Self {
        FlightState {
            launch_site,
            position: launch_site,
            flight_time: 0.0,
        }
    }
}

pub trait FlightEngine {
    type Document: VehicleDocument;

    fn load(&mut self, path: &Path) -> Result<Self::Document, EngineError>;
}

pub trait VehicleDocument {
    type Simulation: FlightSimulation;

    fn simulation(&mut self, index: usize) -> Result<Self::Simulation, EngineError>;
}

pub trait FlightSimulation {
    fn options(&self) -> &SimulationOptions;

    fn geodetic_model(&self) -> GeodeticModel;

    // Runs once, synchronously. Hooks fire in attachment order at both
    // boundaries; the configuration is read, never stored or mutated.
    fn run(
        &mut self,
        config: &SimulationOptions,
        listeners: &mut [Box<dyn SimulationListener>],
    ) -> Result<Vec<TrialResult>, EngineError>;
}
