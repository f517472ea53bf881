//! Kinematica trajectory engine: polyline measurement, position and
//! orientation sampling, Frenet frames, and the per-frame state evaluator.

pub mod evaluator;
pub mod frenet;
pub mod profile;
pub mod sample;
pub mod strategy;
pub mod trajectory;

pub use evaluator::{Evaluator, KinematicState};
pub use frenet::FrenetFrame;
pub use sample::SampleContext;
pub use strategy::StrategyRegistry;
pub use trajectory::{PolylineMetrics, Trajectory};
