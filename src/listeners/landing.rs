use tracing::warn;

use crate::dispersion::runner::TrialResult;
use crate::engine::adapter::{EngineError, FlightState};
use crate::listeners::SimulationListener;
use crate::utils::geodesy;

// Projects the terminal position into range and bearing from the launch
// site. Stateless, so one instance is safe to reuse across trials.
pub struct LandingObserver;

impl LandingObserver {
    pub fn new() -> Self {
        LandingObserver
    }
}

impl SimulationListener for LandingObserver {
    fn on_end(&mut self, state: &FlightState, error: Option<&EngineError>) -> Option<TrialResult> {
        if error.is_some() {
            // Nothing to observe; the run error propagates through the engine
            return None;
        }

        let range = geodesy::range(&state.launch_site, &state.position);
        match geodesy::bearing(&state.launch_site, &state.position) {
            Ok(bearing) => Some(TrialResult::landed(range, bearing)),
            Err(e) => {
                warn!("discarding landing observation: {}", e);
                Some(TrialResult::failed())
            }
        }
    }
}
