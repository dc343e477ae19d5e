use crate::dispersion::runner::TrialResult;
use crate::errors::DispersionError;

// Derived once from the full result sequence
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStatistics {
    pub range_mean: f64,      // meters
    pub range_std: f64,       // meters, population form
    pub bearing_mean_deg: f64, // degrees
    pub bearing_std_deg: f64,  // degrees, population form
    pub trial_count: usize,   // successful trials aggregated
    pub failed_count: usize,  // trials excluded from the aggregate
}

impl AggregateStatistics {
    pub fn report(&self) -> String {
        format!(
            "Rocket landing zone {:.2} m ± {:.2} m bearing {:.2} deg ± {:.4} deg from launch site. Based on {} simulations.",
            self.range_mean, self.range_std, self.bearing_mean_deg, self.bearing_std_deg, self.trial_count
        )
    }
}

// Reduces a result sequence over the successful trials only. Zero successes
// is an error, never NaN output.
pub fn aggregate(results: &[TrialResult]) -> Result<AggregateStatistics, DispersionError> {
    let ranges: Vec<f64> = results
        .iter()
        .filter(|r| r.succeeded)
        .map(|r| r.range)
        .collect();
    // Naive arithmetic on bearing degrees; values straddling the 0/360
    // wraparound skew both the mean and the spread
    let bearings: Vec<f64> = results
        .iter()
        .filter(|r| r.succeeded)
        .map(|r| r.bearing.to_degrees())
        .collect();
    let failed_count = results.len() - ranges.len();

    if ranges.is_empty() {
        return Err(DispersionError::AggregationError(
            "no successful trials to aggregate".to_string(),
        ));
    }

    Ok(AggregateStatistics {
        range_mean: mean(&ranges),
        range_std: population_std(&ranges),
        bearing_mean_deg: mean(&bearings),
        bearing_std_deg: population_std(&bearings),
        trial_count: ranges.len(),
        failed_count,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

// Population standard deviation, not the Bessel-corrected sample form
fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}
