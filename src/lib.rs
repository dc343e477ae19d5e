pub mod constants;
pub mod dispersion;
pub mod engine;
pub mod errors;
pub mod listeners;
pub mod utils;

pub use constants::*;
pub use dispersion::runner::{FailurePolicy, MonteCarloRunner, TrialResult};
pub use dispersion::sampler::{DistributionSpec, ParameterSampler, Perturbations};
pub use dispersion::statistics::{aggregate, AggregateStatistics};
pub use engine::adapter::{
    EngineError, FlightEngine, FlightSimulation, FlightState, GeodeticModel, VehicleDocument,
};
pub use engine::canned::{CannedEngine, CannedOutcome, CannedSimulation};
pub use engine::options::SimulationOptions;
pub use errors::DispersionError;

// Re-export the listener protocol and its stock variants
pub use listeners::{AirStartInjector, LandingObserver, SimulationListener};

// Re-export commonly used utilities
pub use utils::geodesy::{BearingUndefined, WorldPosition};
