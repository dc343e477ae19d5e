#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOptions {
    pub launch_rod_angle: f64,     // radians from vertical
    pub launch_rod_direction: f64, // radians clockwise from north
    pub wind_speed_average: f64,   // m/s
    pub motor_configuration: String,
    pub stage_mass_overrides: Vec<f64>, // kg per stage, empty when design masses apply
}

impl SimulationOptions {
    pub fn new(
        launch_rod_angle: f64,
        launch_rod_direction: f64,
        wind_speed_average: f64,
        motor_configuration: String,
    ) -> Self {
        SimulationOptions {
            launch_rod_angle,
            launch_rod_direction,
            wind_speed_average,
            motor_configuration,
            stage_mass_overrides: Vec::new(),
        }
    }
}
