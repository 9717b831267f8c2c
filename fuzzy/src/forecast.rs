use crate::constants::{EMERGENCY_MAX_SECONDS, FORECAST_JITTER_SECONDS, MIN_GREEN_SECONDS};
use rand::Rng;

/// One random-walk step: perturb the previous duration and clamp it to the
/// operational range.
#[must_use]
pub fn advance(previous: f64, delta: f64) -> f64 {
    (previous + delta).clamp(MIN_GREEN_SECONDS, EMERGENCY_MAX_SECONDS)
}

/// Bounded random-walk forecast of the next `steps` green-phase durations,
/// starting from the last computed one. Callers that need reproducibility
/// pass a seeded RNG.
pub fn forecast<R: Rng>(rng: &mut R, last_duration: f64, steps: usize) -> Vec<f64> {
    let mut sequence = Vec::with_capacity(steps);
    let mut previous = last_duration;
    for _ in 0..steps {
        let delta = rng.gen_range(-FORECAST_JITTER_SECONDS..=FORECAST_JITTER_SECONDS);
        previous = advance(previous, delta);
        sequence.push(previous);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fixed_perturbations_walk_as_documented() {
        let mut previous = 50.0;
        let mut sequence = Vec::new();
        for delta in [3.0, -2.0, 4.0] {
            previous = advance(previous, delta);
            sequence.push(previous);
        }
        assert_eq!(sequence, vec![53.0, 51.0, 55.0]);
    }

    #[test]
    fn advance_clamps_to_the_operational_range() {
        assert_eq!(advance(16.0, -5.0), 15.0);
        assert_eq!(advance(118.0, 5.0), 120.0);
        assert_eq!(advance(50.0, 0.0), 50.0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = forecast(&mut StdRng::seed_from_u64(7), 50.0, 3);
        let b = forecast(&mut StdRng::seed_from_u64(7), 50.0, 3);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn sequence_stays_bounded_and_near_its_seed() {
        let mut rng = StdRng::seed_from_u64(42);
        let sequence = forecast(&mut rng, 15.0, 50);
        let mut previous = 15.0;
        for &duration in &sequence {
            assert!((15.0..=120.0).contains(&duration));
            assert!((duration - previous).abs() <= 5.0 + 1e-9);
            previous = duration;
        }
    }
}
