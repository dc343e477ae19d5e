use crate::engine::adapter::FlightState;
use crate::listeners::SimulationListener;

// Lifts the vehicle by a fixed amount before the run, emulating an air
// start from a carrier at altitude
pub struct AirStartInjector {
    pub altitude: f64, // meters added to the initial position
}

impl AirStartInjector {
    pub fn new(altitude: f64) -> Self {
        AirStartInjector { altitude }
    }
}

impl SimulationListener for AirStartInjector {
    fn on_start(&mut self, state: &mut FlightState) {
        state.position.altitude += self.altitude;
    }
}
