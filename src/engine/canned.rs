use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::dispersion::runner::TrialResult;
use crate::engine::adapter::{
    EngineError, FlightEngine, FlightSimulation, FlightState, GeodeticModel, VehicleDocument,
};
use crate::engine::options::SimulationOptions;
use crate::listeners::SimulationListener;
use crate::utils::geodesy::WorldPosition;

// Replays recorded outcomes from a JSON flight card instead of integrating
// flight dynamics; satisfies the whole adapter contract.
pub struct CannedEngine;

// Terminal outcome applied on top of whatever the start hooks did
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CannedOutcome {
    pub delta_latitude: f64,  // degrees
    pub delta_longitude: f64, // degrees
    #[serde(default)]
    pub delta_altitude: f64, // meters
    #[serde(default)]
    pub flight_time: f64, // seconds
}

#[derive(Debug, Clone, Deserialize)]
struct FlightCard {
    name: String,
    launch_site: WorldPosition,
    simulations: Vec<SimulationCard>,
}

#[derive(Debug, Clone, Deserialize)]
struct SimulationCard {
    name: String,
    geodetic_model: GeodeticModel,
    options: OptionsCard,
    outcome: CannedOutcome,
}

// Card angles are degrees for the sake of hand-edited files; the options
// handed to the rest of the system are radians.
#[derive(Debug, Clone, Deserialize)]
struct OptionsCard {
    launch_rod_angle: f64,     // degrees from vertical
    launch_rod_direction: f64, // degrees clockwise from north
    wind_speed_average: f64,   // m/s
    motor_configuration: String,
    #[serde(default)]
    stage_mass_overrides: Vec<f64>, // kg per stage
}

#[derive(Debug)]
pub struct CannedDocument {
    card: FlightCard,
}

#[derive(Debug)]
pub struct CannedSimulation {
    launch_site: WorldPosition,
    options: SimulationOptions,
    geodetic_model: GeodeticModel,
    outcome: CannedOutcome,
}

impl CannedEngine {
    pub fn new() -> Self {
        CannedEngine
    }
}

impl FlightEngine for CannedEngine {
    type Document = CannedDocument;

    fn load(&mut self, path: &Path) -> Result<CannedDocument, EngineError> {
        if !path.exists() {
            return Err(EngineError::FileNotFound(path.to_path_buf()));
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| EngineError::LoadError(format!("{}: {}", path.display(), e)))?;
        let card: FlightCard = serde_json::from_str(&raw)
            .map_err(|e| EngineError::LoadError(format!("{}: {}", path.display(), e)))?;

        debug!(
            "loaded flight card '{}' with {} simulation(s)",
            card.name,
            card.simulations.len()
        );

        Ok(CannedDocument { card })
    }
}

impl VehicleDocument for CannedDocument {
    type Simulation = CannedSimulation;

    fn simulation(&mut self, index: usize) -> Result<CannedSimulation, EngineError> {
        let entry = self
            .card
            .simulations
            .get(index)
            .ok_or(EngineError::MissingSimulation(index))?
            .clone();

        debug!("selected simulation '{}' at index {}", entry.name, index);

        let mut options = SimulationOptions::new(
            entry.options.launch_rod_angle.to_radians(),
            entry.options.launch_rod_direction.to_radians(),
            entry.options.wind_speed_average,
            entry.options.motor_configuration,
        );
        options.stage_mass_overrides = entry.options.stage_mass_overrides;

        Ok(CannedSimulation::new(
            self.card.launch_site,
            options,
            entry.geodetic_model,
            entry.outcome,
        ))
    }
}

impl CannedSimulation {
    pub fn new(
        launch_site: WorldPosition,
        options: SimulationOptions,
        geodetic_model: GeodeticModel,
        outcome: CannedOutcome,
    ) -> Self {
        CannedSimulation {
            launch_site,
            options,
            geodetic_model,
            outcome,
        }
    }

    fn check_config(&self, config: &SimulationOptions) -> Option<EngineError> {
        let fields = [
            ("launch rod angle", config.launch_rod_angle),
            ("launch rod direction", config.launch_rod_direction),
            ("wind speed average", config.wind_speed_average),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Some(EngineError::RuntimeError(format!(
                    "non-finite {}: {}",
                    name, value
                )));
            }
        }

        None
    }
}

impl FlightSimulation for CannedSimulation {
    fn options(&self) -> &SimulationOptions {
        &self.options
    }

    fn geodetic_model(&self) -> GeodeticModel {
        self.geodetic_model
    }

    fn run(
        &mut self,
        config: &SimulationOptions,
        listeners: &mut [Box<dyn SimulationListener>],
    ) -> Result<Vec<TrialResult>, EngineError> {
        let mut state = FlightState::new(self.launch_site);

        // End hooks still fire on a rejected configuration, with the error
        if let Some(err) = self.check_config(config) {
            for listener in listeners.iter_mut() {
                listener.on_end(&state, Some(&err));
            }
            return Err(err);
        }

        for listener in listeners.iter_mut() {
            listener.on_start(&mut state);
        }

        // Replay the recorded outcome on top of the post-start state
        state.position.latitude += self.outcome.delta_latitude;
        state.position.longitude += self.outcome.delta_longitude;
        state.position.altitude += self.outcome.delta_altitude;
        state.flight_time = self.outcome.flight_time;

        let mut observations = Vec::new();
        for listener in listeners.iter_mut() {
            if let Some(result) = listener.on_end(&state, None) {
                observations.push(result);
            }
        }

        Ok(observations)
    }
}
