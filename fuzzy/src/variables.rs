use crate::constants::{
    DENSITY_POINTS, DENSITY_UNIVERSE, GREEN_POINTS, GREEN_UNIVERSE, INCIDENT_POINTS,
    INCIDENT_UNIVERSE, SPEED_POINTS, SPEED_UNIVERSE, WAIT_POINTS, WAIT_UNIVERSE,
};
use crate::membership::Triangle;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Input category of a linguistic variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn idx(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

/// Output category of the green-phase duration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum GreenCategory {
    Short,
    Medium,
    Long,
}

impl GreenCategory {
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    #[must_use]
    pub const fn idx(self) -> usize {
        match self {
            Self::Short => 0,
            Self::Medium => 1,
            Self::Long => 2,
        }
    }
}

/// Bounded numeric range a linguistic variable is defined over.
///
/// `step` is only consumed by discretized evaluation (centroid sampling).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
}

impl Universe {
    #[must_use]
    pub fn clip(self, x: f64) -> f64 {
        x.clamp(self.lower, self.upper)
    }

    /// Sample points from `lower` to `upper` inclusive, spaced by `step`.
    pub fn samples(self) -> impl Iterator<Item = f64> {
        let count = ((self.upper - self.lower) / self.step).round() as usize;
        let (lower, step) = (self.lower, self.step);
        (0..=count).map(move |i| lower + step * i as f64)
    }
}

/// A named variable with three categories, each backed by one triangle.
/// Category uniqueness is guaranteed by the index enums.
#[derive(Clone, Debug)]
pub struct Variable {
    pub name: &'static str,
    pub universe: Universe,
    terms: [Triangle; 3],
}

impl Variable {
    fn from_points(name: &'static str, universe: Universe, points: [[f64; 3]; 3]) -> Self {
        Self { name, universe, terms: points.map(Triangle::from_points) }
    }

    #[must_use]
    pub fn term(&self, idx: usize) -> Triangle {
        self.terms[idx]
    }

    /// Membership degree of `x` in each category, in index order.
    #[must_use]
    pub fn degrees(&self, x: f64) -> [f64; 3] {
        self.terms.map(|t| t.degree(x))
    }
}

/// The five linguistic variables of the timing model, built once and
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct Registry {
    pub density: Variable,
    pub speed: Variable,
    pub wait: Variable,
    pub incidents: Variable,
    pub green_time: Variable,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            density: Variable::from_points("density", DENSITY_UNIVERSE, DENSITY_POINTS),
            speed: Variable::from_points("speed", SPEED_UNIVERSE, SPEED_POINTS),
            wait: Variable::from_points("wait", WAIT_UNIVERSE, WAIT_POINTS),
            incidents: Variable::from_points("incidents", INCIDENT_UNIVERSE, INCIDENT_POINTS),
            green_time: Variable::from_points("green_time", GREEN_UNIVERSE, GREEN_POINTS),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
