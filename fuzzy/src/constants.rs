use crate::variables::Universe;

pub const DENSITY_UNIVERSE: Universe = Universe { lower: 0.0, upper: 200.0, step: 1.0 };
pub const SPEED_UNIVERSE: Universe = Universe { lower: 0.0, upper: 70.0, step: 1.0 };
pub const WAIT_UNIVERSE: Universe = Universe { lower: 0.0, upper: 150.0, step: 1.0 };
pub const INCIDENT_UNIVERSE: Universe = Universe { lower: 0.0, upper: 6.0, step: 0.1 };
pub const GREEN_UNIVERSE: Universe = Universe { lower: 0.0, upper: 90.0, step: 1.0 };

// Membership control points (left, peak, right), indexed by Level::idx()
// respectively GreenCategory::idx(). The defuzzified output depends on
// these exact values.
pub const DENSITY_POINTS: [[f64; 3]; 3] =
    [[0.0, 0.0, 80.0], [50.0, 100.0, 150.0], [120.0, 200.0, 200.0]];
pub const SPEED_POINTS: [[f64; 3]; 3] =
    [[0.0, 0.0, 30.0], [20.0, 35.0, 50.0], [40.0, 70.0, 70.0]];
pub const WAIT_POINTS: [[f64; 3]; 3] =
    [[0.0, 0.0, 50.0], [30.0, 75.0, 120.0], [100.0, 150.0, 150.0]];
pub const INCIDENT_POINTS: [[f64; 3]; 3] =
    [[0.0, 0.0, 2.0], [1.0, 3.0, 5.0], [4.0, 6.0, 6.0]];
pub const GREEN_POINTS: [[f64; 3]; 3] =
    [[0.0, 15.0, 30.0], [20.0, 35.0, 50.0], [40.0, 65.0, 90.0]];

/// Priority score (0-8) at or above which a rule fires the Long category.
pub const LONG_SCORE_MIN: u8 = 7;
/// Priority score at or above which a rule fires Medium (below: Short).
pub const MEDIUM_SCORE_MIN: u8 = 4;

// Closed-form approximation weights
pub const DENSITY_WEIGHT: f64 = 0.2;
pub const WAIT_WEIGHT: f64 = 0.3;
pub const SPEED_WEIGHT: f64 = 0.1;
pub const INCIDENT_WEIGHT: f64 = 5.0;

// Operational green-phase bounds in seconds
pub const MIN_GREEN_SECONDS: f64 = 15.0;
pub const MAX_GREEN_SECONDS: f64 = 90.0;
pub const EMERGENCY_MAX_SECONDS: f64 = 120.0;
pub const EMERGENCY_EXTENSION_SECONDS: f64 = 15.0;

pub const FORECAST_STEPS: usize = 3;
pub const FORECAST_JITTER_SECONDS: f64 = 5.0;

pub const EMERGENCY_NOTE: &str = "Emergency mode active: extra green time applied.";
