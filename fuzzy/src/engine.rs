use crate::constants::{
    DENSITY_WEIGHT, INCIDENT_WEIGHT, MAX_GREEN_SECONDS, MIN_GREEN_SECONDS, SPEED_WEIGHT,
    WAIT_WEIGHT,
};
use crate::error::FuzzyError;
use crate::rules::{build_rules, Rule};
use crate::variables::{GreenCategory, Registry};
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Inference strategy. `Mamdani` is the full min/max inference with centroid
/// defuzzification; `WeightedSum` is the closed-form approximation of the
/// same model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum InferenceMode {
    Mamdani,
    WeightedSum,
}

/// Crisp observations for one traffic segment.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentReading {
    pub density: f64,
    pub speed: f64,
    pub wait: f64,
    pub incidents: f64,
}

/// The inference engine. Variables and rules are built once; `infer` never
/// mutates shared state, so one engine can serve concurrent callers.
#[derive(Clone, Debug)]
pub struct FuzzyEngine {
    registry: Registry,
    rules: Vec<Rule>,
    mode: InferenceMode,
}

impl FuzzyEngine {
    #[must_use]
    pub fn new(mode: InferenceMode) -> Self {
        Self { registry: Registry::new(), rules: build_rules(), mode }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn mode(&self) -> InferenceMode {
        self.mode
    }

    /// Crisp green-phase duration for one segment, in seconds.
    ///
    /// # Errors
    /// `FuzzyError::EmptyAggregation` if the aggregated output membership
    /// has zero area (internal-invariant violation, see `FuzzyError`).
    pub fn infer(&self, reading: SegmentReading) -> Result<f64, FuzzyError> {
        match self.mode {
            InferenceMode::Mamdani => self.infer_mamdani(reading),
            InferenceMode::WeightedSum => Ok(weighted_sum(reading)),
        }
    }

    fn infer_mamdani(&self, reading: SegmentReading) -> Result<f64, FuzzyError> {
        let reg = &self.registry;
        let density = reg.density.degrees(reg.density.universe.clip(reading.density));
        let speed = reg.speed.degrees(reg.speed.universe.clip(reading.speed));
        let wait = reg.wait.degrees(reg.wait.universe.clip(reading.wait));
        let incidents = reg.incidents.degrees(reg.incidents.universe.clip(reading.incidents));

        // Fuzzy AND per rule, fuzzy OR across rules sharing an output.
        let mut activation = [0.0_f64; 3];
        for rule in &self.rules {
            let strength = density[rule.density.idx()]
                .min(speed[rule.speed.idx()])
                .min(wait[rule.wait.idx()])
                .min(incidents[rule.incidents.idx()]);
            let slot = &mut activation[rule.output.idx()];
            if strength > *slot {
                *slot = strength;
            }
        }
        debug!(
            "activation short={:.3} medium={:.3} long={:.3}",
            activation[0], activation[1], activation[2]
        );

        // Centroid of the clipped-and-merged output membership.
        let green = &reg.green_time;
        let mut weighted = 0.0;
        let mut area = 0.0;
        for x in green.universe.samples() {
            let degrees = green.degrees(x);
            let mut mu = 0.0_f64;
            for cat in GreenCategory::ALL {
                mu = mu.max(degrees[cat.idx()].min(activation[cat.idx()]));
            }
            weighted += x * mu;
            area += mu;
        }

        if area == 0.0 {
            return Err(FuzzyError::EmptyAggregation);
        }
        Ok(green.universe.clip(weighted / area))
    }
}

/// Closed-form approximation of the rule base, clamped to the operational
/// green-phase range.
#[must_use]
pub fn weighted_sum(reading: SegmentReading) -> f64 {
    let raw = DENSITY_WEIGHT * reading.density + WAIT_WEIGHT * reading.wait
        - SPEED_WEIGHT * reading.speed
        + INCIDENT_WEIGHT * reading.incidents;
    raw.clamp(MIN_GREEN_SECONDS, MAX_GREEN_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FuzzyEngine {
        FuzzyEngine::new(InferenceMode::Mamdani)
    }

    #[test]
    fn all_medium_inputs_land_in_the_medium_support() {
        let duration = engine()
            .infer(SegmentReading { density: 100.0, speed: 35.0, wait: 75.0, incidents: 3.0 })
            .unwrap();
        assert!((20.0..=50.0).contains(&duration), "got {duration}");
        // Symmetric triangle, fully activated: the centroid is its peak.
        assert!((duration - 35.0).abs() < 1e-9);
    }

    #[test]
    fn extreme_congestion_lands_in_the_long_support() {
        let duration = engine()
            .infer(SegmentReading { density: 200.0, speed: 0.0, wait: 150.0, incidents: 6.0 })
            .unwrap();
        assert!((60.0..=90.0).contains(&duration), "got {duration}");
    }

    #[test]
    fn empty_road_lands_in_the_short_support() {
        let duration = engine()
            .infer(SegmentReading { density: 0.0, speed: 70.0, wait: 0.0, incidents: 0.0 })
            .unwrap();
        assert!((0.0..=30.0).contains(&duration), "got {duration}");
    }

    #[test]
    fn output_stays_within_the_green_universe() {
        let eng = engine();
        for density in [0.0, 60.0, 130.0, 200.0] {
            for speed in [0.0, 35.0, 70.0] {
                for wait in [0.0, 75.0, 150.0] {
                    for incidents in [0.0, 3.0, 6.0] {
                        let duration = eng
                            .infer(SegmentReading { density, speed, wait, incidents })
                            .unwrap();
                        assert!(
                            (0.0..=90.0).contains(&duration),
                            "out of range for d={density} v={speed} w={wait} i={incidents}: {duration}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn more_density_never_shortens_the_phase() {
        let eng = engine();
        let mut previous = 0.0;
        for density in [0.0, 50.0, 100.0, 150.0, 200.0] {
            let duration = eng
                .infer(SegmentReading { density, speed: 35.0, wait: 75.0, incidents: 3.0 })
                .unwrap();
            assert!(duration >= previous - 1e-9, "density {density} shortened the phase");
            previous = duration;
        }
    }

    #[test]
    fn more_wait_never_shortens_the_phase() {
        let eng = engine();
        let mut previous = 0.0;
        for wait in [0.0, 40.0, 75.0, 110.0, 150.0] {
            let duration = eng
                .infer(SegmentReading { density: 100.0, speed: 35.0, wait, incidents: 3.0 })
                .unwrap();
            assert!(duration >= previous - 1e-9, "wait {wait} shortened the phase");
            previous = duration;
        }
    }

    #[test]
    fn out_of_universe_inputs_are_clipped_not_rejected() {
        let eng = engine();
        let clipped = eng
            .infer(SegmentReading { density: 500.0, speed: -10.0, wait: 400.0, incidents: 9.0 })
            .unwrap();
        let extreme = eng
            .infer(SegmentReading { density: 200.0, speed: 0.0, wait: 150.0, incidents: 6.0 })
            .unwrap();
        assert_eq!(clipped, extreme);
    }

    #[test]
    fn weighted_sum_matches_the_documented_formula() {
        let raw =
            weighted_sum(SegmentReading { density: 100.0, speed: 35.0, wait: 75.0, incidents: 3.0 });
        // 0.2*100 + 0.3*75 - 0.1*35 + 5*3 = 54.0
        assert!((raw - 54.0).abs() < 1e-9);
    }

    #[test]
    fn weighted_sum_clamps_to_the_operational_floor() {
        let raw =
            weighted_sum(SegmentReading { density: 0.0, speed: 70.0, wait: 0.0, incidents: 0.0 });
        assert_eq!(raw, 15.0);
    }

    #[test]
    fn weighted_sum_clamps_to_the_operational_ceiling() {
        let raw =
            weighted_sum(SegmentReading { density: 200.0, speed: 0.0, wait: 150.0, incidents: 6.0 });
        assert_eq!(raw, 90.0);
    }

    #[test]
    fn engine_mode_selects_the_strategy() {
        let reading = SegmentReading { density: 0.0, speed: 70.0, wait: 0.0, incidents: 0.0 };
        let closed = FuzzyEngine::new(InferenceMode::WeightedSum).infer(reading).unwrap();
        assert_eq!(closed, 15.0);
        let full = engine().infer(reading).unwrap();
        assert!(full < 30.0);
    }
}
