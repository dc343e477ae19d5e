use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::constants::{
    DEFAULT_ROD_ANGLE_MEAN, DEFAULT_ROD_ANGLE_STD, DEFAULT_ROD_DIRECTION_MEAN,
    DEFAULT_ROD_DIRECTION_STD, DEFAULT_WIND_SPEED_MEAN, DEFAULT_WIND_SPEED_STD,
};
use crate::engine::options::SimulationOptions;
use crate::errors::DispersionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSpec {
    pub mean: f64,
    pub std_dev: f64,
}

impl DistributionSpec {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        DistributionSpec { mean, std_dev }
    }

    pub fn is_valid(&self) -> bool {
        self.mean.is_finite() && self.std_dev.is_finite() && self.std_dev >= 0.0
    }
}

// Gaussian perturbation table for one batch. Angle specs are degrees; the
// conversion to radians happens when a draw is applied to a configuration.
#[derive(Debug, Clone)]
pub struct Perturbations {
    pub launch_rod_angle: DistributionSpec,     // degrees
    pub launch_rod_direction: DistributionSpec, // degrees
    pub wind_speed_average: DistributionSpec,   // m/s
    pub stage_mass: Option<DistributionSpec>,   // kg
}

impl Perturbations {
    pub fn new(
        launch_rod_angle: DistributionSpec,
        launch_rod_direction: DistributionSpec,
        wind_speed_average: DistributionSpec,
    ) -> Self {
        Perturbations {
            launch_rod_angle,
            launch_rod_direction,
            wind_speed_average,
            stage_mass: None,
        }
    }

    pub fn validate(&self) -> Result<(), DispersionError> {
        for (name, spec) in self.entries() {
            if !spec.is_valid() {
                return Err(DispersionError::ConfigurationError(format!(
                    "invalid {} distribution: mean {}, std dev {}",
                    name, spec.mean, spec.std_dev
                )));
            }
        }
        Ok(())
    }

    // Each draw is independent; no cross-correlation between parameters
    pub fn perturb(
        &self,
        baseline: &SimulationOptions,
        sampler: &mut ParameterSampler,
    ) -> Result<SimulationOptions, DispersionError> {
        let mut config = baseline.clone();

        config.launch_rod_angle = sampler.draw(&self.launch_rod_angle)?.to_radians();
        config.launch_rod_direction = sampler.draw(&self.launch_rod_direction)?.to_radians();
        config.wind_speed_average = sampler.draw(&self.wind_speed_average)?;

        if let Some(spec) = self.stage_mass {
            for mass in &mut config.stage_mass_overrides {
                *mass = sampler.draw(&spec)?;
            }
        }

        Ok(config)
    }

    fn entries(&self) -> Vec<(&'static str, DistributionSpec)> {
        let mut entries = vec![
            ("launch rod angle", self.launch_rod_angle),
            ("launch rod direction", self.launch_rod_direction),
            ("wind speed average", self.wind_speed_average),
        ];
        if let Some(spec) = self.stage_mass {
            entries.push(("stage mass", spec));
        }
        entries
    }
}

impl Default for Perturbations {
    fn default() -> Self {
        Perturbations::new(
            DistributionSpec::new(DEFAULT_ROD_ANGLE_MEAN, DEFAULT_ROD_ANGLE_STD),
            DistributionSpec::new(DEFAULT_ROD_DIRECTION_MEAN, DEFAULT_ROD_DIRECTION_STD),
            DistributionSpec::new(DEFAULT_WIND_SPEED_MEAN, DEFAULT_WIND_SPEED_STD),
        )
    }
}

// Seeded Gaussian sampler; the same seed replays the same draw sequence
pub struct ParameterSampler {
    rng: StdRng,
}

impl ParameterSampler {
    pub fn new(seed: u64) -> Self {
        ParameterSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // Values pass through unclamped; the engine decides what to do with
    // out-of-range parameters. rand_distr does not reject a negative
    // spread, this guard does.
    pub fn draw(&mut self, spec: &DistributionSpec) -> Result<f64, DispersionError> {
        if !spec.is_valid() {
            return Err(DispersionError::ConfigurationError(format!(
                "invalid distribution: mean {}, std dev {}",
                spec.mean, spec.std_dev
            )));
        }
        let normal = Normal::new(spec.mean, spec.std_dev).map_err(|e| {
            DispersionError::ConfigurationError(format!(
                "invalid distribution (mean {}, std dev {}): {}",
                spec.mean, spec.std_dev, e
            ))
        })?;
        Ok(normal.sample(&mut self.rng))
    }
}
