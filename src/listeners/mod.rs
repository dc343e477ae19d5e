pub mod air_start;
pub mod landing;

pub use air_start::AirStartInjector;
pub use landing::LandingObserver;

use crate::dispersion::runner::TrialResult;
use crate::engine::adapter::{EngineError, FlightState};

// Hooks fired by the engine at the run boundaries. Both default to no-ops,
// so implementors override only the boundary they care about.
pub trait SimulationListener {
    // May adjust the initial state
    fn on_start(&mut self, _state: &mut FlightState) {}

    // Receives the engine error when the run failed; returns a landing
    // observation when the listener produced one
    fn on_end(
        &mut self,
        _state: &FlightState,
        _error: Option<&EngineError>,
    ) -> Option<TrialResult> {
        None
    }
}
