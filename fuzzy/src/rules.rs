use crate::constants::{LONG_SCORE_MIN, MEDIUM_SCORE_MIN};
use crate::variables::{GreenCategory, Level};

/// One rule of the base: a conjunction of four input categories mapped to
/// one output category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    pub density: Level,
    pub speed: Level,
    pub wait: Level,
    pub incidents: Level,
    pub output: GreenCategory,
}

const fn demand_points(level: Level) -> u8 {
    match level {
        Level::High => 2,
        Level::Medium => 1,
        Level::Low => 0,
    }
}

// Speed scores inverted: slow traffic is congestion pressure.
const fn slowdown_points(level: Level) -> u8 {
    match level {
        Level::Low => 2,
        Level::Medium => 1,
        Level::High => 0,
    }
}

/// Priority score of a category combination, 0 to 8.
#[must_use]
pub const fn priority_score(density: Level, speed: Level, wait: Level, incidents: Level) -> u8 {
    demand_points(density) + slowdown_points(speed) + demand_points(wait) + demand_points(incidents)
}

#[must_use]
pub const fn output_for_score(score: u8) -> GreenCategory {
    if score >= LONG_SCORE_MIN {
        GreenCategory::Long
    } else if score >= MEDIUM_SCORE_MIN {
        GreenCategory::Medium
    } else {
        GreenCategory::Short
    }
}

/// The complete rule base: the Cartesian product of all input categories,
/// in nested density x speed x wait x incidents order.
#[must_use]
pub fn build_rules() -> Vec<Rule> {
    let mut rules = Vec::with_capacity(81);
    for density in Level::ALL {
        for speed in Level::ALL {
            for wait in Level::ALL {
                for incidents in Level::ALL {
                    let score = priority_score(density, speed, wait, incidents);
                    rules.push(Rule {
                        density,
                        speed,
                        wait,
                        incidents,
                        output: output_for_score(score),
                    });
                }
            }
        }
    }
    rules
}
