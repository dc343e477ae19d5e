pub mod runner;
pub mod sampler;
pub mod statistics;
