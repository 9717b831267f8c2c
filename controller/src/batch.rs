use anyhow::{ensure, Context, Result};
use fuzzy::constants::{
    EMERGENCY_EXTENSION_SECONDS, EMERGENCY_MAX_SECONDS, EMERGENCY_NOTE, FORECAST_STEPS,
    MAX_GREEN_SECONDS, MIN_GREEN_SECONDS,
};
use fuzzy::{explain, forecast, CategoryDegrees, FuzzyEngine, GreenCategory, SegmentReading};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The intersection layout is fixed at four approach segments.
pub const SEGMENT_COUNT: usize = 4;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimingRequest {
    pub segments: Vec<SegmentReading>,
    #[serde(default)]
    pub emergency: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentOutcome {
    pub duration: f64,
    pub degrees: CategoryDegrees,
    pub dominant: GreenCategory,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimingReport {
    pub segments: Vec<SegmentOutcome>,
    pub forecast: Vec<f64>,
}

/// Caller-level adjustment on top of the core inference: emergency mode adds
/// a fixed extension and raises the ceiling, and every phase respects the
/// operational floor.
#[must_use]
pub fn adjust_duration(raw: f64, emergency: bool) -> f64 {
    let (extension, ceiling) = if emergency {
        (EMERGENCY_EXTENSION_SECONDS, EMERGENCY_MAX_SECONDS)
    } else {
        (0.0, MAX_GREEN_SECONDS)
    };
    (raw + extension).clamp(MIN_GREEN_SECONDS, ceiling)
}

/// Runs the engine over all four segments and derives the forecast from the
/// last one.
pub fn evaluate_request<R: Rng>(
    engine: &FuzzyEngine,
    request: &TimingRequest,
    rng: &mut R,
) -> Result<TimingReport> {
    ensure!(
        request.segments.len() == SEGMENT_COUNT,
        "expected {} segments, got {}",
        SEGMENT_COUNT,
        request.segments.len()
    );

    let mut segments = Vec::with_capacity(SEGMENT_COUNT);
    for (index, reading) in request.segments.iter().enumerate() {
        let raw = engine
            .infer(*reading)
            .with_context(|| format!("inference failed for segment {}", index + 1))?;
        let duration = adjust_duration(raw, request.emergency);
        debug!("segment {} raw={:.2}s adjusted={:.2}s", index + 1, raw, duration);

        let explanation = explain(engine.registry(), duration);
        let mut text = explanation.text;
        if request.emergency {
            text.push(' ');
            text.push_str(EMERGENCY_NOTE);
        }

        segments.push(SegmentOutcome {
            duration: round2(duration),
            degrees: CategoryDegrees {
                short: round2(explanation.degrees.short),
                medium: round2(explanation.degrees.medium),
                long: round2(explanation.degrees.long),
            },
            dominant: explanation.dominant,
            text,
        });
    }

    let last = segments.last().context("no segments evaluated")?.duration;
    let forecast = forecast(rng, last, FORECAST_STEPS).into_iter().map(round2).collect();

    Ok(TimingReport { segments, forecast })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
