use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use dispersion_analysis::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Monte Carlo landing-dispersion analysis")]
struct Args {
    // Flight card describing the vehicle and its recorded simulations
    document: PathBuf,

    #[arg(long, default_value_t = 0)]
    simulation: usize,

    #[arg(long, default_value_t = DEFAULT_TRIAL_COUNT)]
    trials: usize,

    // Drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_ROD_ANGLE_MEAN)]
    rod_angle: f64,

    #[arg(long, default_value_t = DEFAULT_ROD_ANGLE_STD)]
    rod_angle_sd: f64,

    #[arg(long, default_value_t = DEFAULT_ROD_DIRECTION_MEAN)]
    rod_direction: f64,

    #[arg(long, default_value_t = DEFAULT_ROD_DIRECTION_STD)]
    rod_direction_sd: f64,

    #[arg(long, default_value_t = DEFAULT_WIND_SPEED_MEAN)]
    wind_speed: f64,

    #[arg(long, default_value_t = DEFAULT_WIND_SPEED_STD)]
    wind_speed_sd: f64,

    // Meters above the pad
    #[arg(long)]
    air_start: Option<f64>,

    #[arg(long)]
    skip_failures: bool,
}

fn main() -> Result<(), DispersionError> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if !args.document.exists() {
        return Err(DispersionError::ConfigurationError(format!(
            "baseline document {} does not exist",
            args.document.display()
        )));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("sampler seed: {}", seed);

    let mut engine = CannedEngine::new();
    let mut document = engine.load(&args.document)?;
    let mut simulation = document.simulation(args.simulation)?;

    let perturbations = Perturbations::new(
        DistributionSpec::new(args.rod_angle, args.rod_angle_sd),
        DistributionSpec::new(args.rod_direction, args.rod_direction_sd),
        DistributionSpec::new(args.wind_speed, args.wind_speed_sd),
    );

    let mut runner = MonteCarloRunner::new(args.trials, perturbations, seed);
    if args.skip_failures {
        runner.failure_policy = FailurePolicy::SkipAndContinue;
    }

    let mut listeners: Vec<Box<dyn SimulationListener>> = Vec::new();
    if let Some(altitude) = args.air_start {
        listeners.push(Box::new(AirStartInjector::new(altitude)));
    }

    let results = runner.run(&mut simulation, listeners)?;
    let stats = aggregate(&results)?;

    if stats.failed_count > 0 {
        warn!("{} trial(s) failed and were excluded", stats.failed_count);
    }

    println!("{}", stats.report());

    Ok(())
}
