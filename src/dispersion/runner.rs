use tracing::{debug, error, info, warn};

use crate::dispersion::sampler::{ParameterSampler, Perturbations};
use crate::engine::adapter::{FlightSimulation, GeodeticModel};
use crate::errors::DispersionError;
use crate::listeners::{LandingObserver, SimulationListener};

// Failed trials keep their slot in the sequence with zeroed measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    pub range: f64,   // meters from the launch site
    pub bearing: f64, // radians, [0, 2*pi)
    pub succeeded: bool,
}

impl TrialResult {
    pub fn landed(range: f64, bearing: f64) -> Self {
        TrialResult {
            range,
            bearing,
            succeeded: true,
        }
    }

    pub fn failed() -> Self {
        TrialResult {
            range: 0.0,
            bearing: 0.0,
            succeeded: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    // First engine failure aborts the whole batch
    AbortBatch,
    // Record the failure and move on to the next trial
    SkipAndContinue,
}

// Drives a batch of perturbed trials against one simulation handle,
// strictly sequentially, and owns the ordered result sequence
pub struct MonteCarloRunner {
    pub trial_count: usize,
    pub perturbations: Perturbations,
    pub failure_policy: FailurePolicy,
    sampler: ParameterSampler,
}

impl MonteCarloRunner {
    pub fn new(trial_count: usize, perturbations: Perturbations, seed: u64) -> Self {
        MonteCarloRunner {
            trial_count,
            perturbations,
            failure_policy: FailurePolicy::AbortBatch,
            sampler: ParameterSampler::new(seed),
        }
    }

    // Caller-supplied listeners are attached to every trial in order,
    // followed by the runner's own landing observer, whose observation
    // becomes the trial's result
    pub fn run<S: FlightSimulation>(
        &mut self,
        simulation: &mut S,
        listeners: Vec<Box<dyn SimulationListener>>,
    ) -> Result<Vec<TrialResult>, DispersionError> {
        self.perturbations.validate()?;

        let model = simulation.geodetic_model();
        if model != GeodeticModel::Flat {
            return Err(DispersionError::ConfigurationError(format!(
                "unsupported geodetic computation strategy {:?}: only Flat is supported",
                model
            )));
        }

        let baseline = simulation.options().clone();
        let mut chain = listeners;
        chain.push(Box::new(LandingObserver::new()));

        info!("starting dispersion batch of {} trial(s)", self.trial_count);

        let mut results = Vec::with_capacity(self.trial_count);
        for trial in 0..self.trial_count {
            let config = self.perturbations.perturb(&baseline, &mut self.sampler)?;
            debug!(
                "trial {}: rod angle {:.4} rad, rod direction {:.4} rad, wind {:.2} m/s",
                trial,
                config.launch_rod_angle,
                config.launch_rod_direction,
                config.wind_speed_average
            );

            match simulation.run(&config, &mut chain) {
                Ok(observations) => match observations.into_iter().last() {
                    Some(result) => results.push(result),
                    None => {
                        return Err(DispersionError::ConfigurationError(
                            "listener chain produced no landing observation".to_string(),
                        ))
                    }
                },
                Err(source) => {
                    error!("trial {} failed: {}", trial, source);
                    match self.failure_policy {
                        FailurePolicy::AbortBatch => {
                            return Err(DispersionError::TrialError { trial, source });
                        }
                        FailurePolicy::SkipAndContinue => {
                            warn!("skipping trial {} and continuing the batch", trial);
                            results.push(TrialResult::failed());
                        }
                    }
                }
            }
        }

        Ok(results)
    }
}
