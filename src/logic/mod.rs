pub mod advisor;
pub mod confidence;
pub mod estimator;
pub mod rules;

pub use estimator::YieldEstimator;
pub use rules::YieldEngine;
