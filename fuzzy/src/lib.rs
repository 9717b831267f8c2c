pub mod constants;
pub mod engine;
pub mod error;
pub mod explain;
pub mod forecast;
pub mod membership;
pub mod rules;
pub mod variables;

pub use engine::{weighted_sum, FuzzyEngine, InferenceMode, SegmentReading};
pub use error::FuzzyError;
pub use explain::{explain, CategoryDegrees, Explanation};
pub use forecast::forecast;
pub use membership::Triangle;
pub use variables::{GreenCategory, Level, Registry, Universe, Variable};
