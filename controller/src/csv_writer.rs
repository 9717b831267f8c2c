use anyhow::Result;
use chrono::Utc;
use csv::Writer;
use log::{info, warn};

use crate::batch::{TimingReport, TimingRequest};
use fuzzy::InferenceMode;

/// Writes the per-segment numbers and the forecast to a timestamped CSV
/// under `logs/`. Downstream chart tooling consumes this file.
pub fn write_timing_csv(
    request: &TimingRequest,
    report: &TimingReport,
    mode: InferenceMode,
) -> Result<String> {
    if report.segments.is_empty() {
        warn!("No segment outcomes to save");
        return Ok(String::new());
    }

    std::fs::create_dir_all("logs")?;
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("logs/timing_{}_{timestamp}.csv", mode.to_string().to_lowercase());

    let mut writer = Writer::from_path(&filename)?;
    writer.write_record([
        "segment",
        "density",
        "speed",
        "wait",
        "incidents",
        "duration_s",
        "short",
        "medium",
        "long",
        "dominant",
        "emergency",
    ])?;

    for (index, (reading, outcome)) in
        request.segments.iter().zip(&report.segments).enumerate()
    {
        writer.write_record(&[
            (index + 1).to_string(),
            reading.density.to_string(),
            reading.speed.to_string(),
            reading.wait.to_string(),
            reading.incidents.to_string(),
            outcome.duration.to_string(),
            outcome.degrees.short.to_string(),
            outcome.degrees.medium.to_string(),
            outcome.degrees.long.to_string(),
            outcome.dominant.to_string(),
            request.emergency.to_string(),
        ])?;
    }

    // Forecast rows follow the segments so the whole series lands in one file.
    for (step, duration) in report.forecast.iter().enumerate() {
        writer.write_record(&[
            format!("forecast_{}", step + 1),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            duration.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            request.emergency.to_string(),
        ])?;
    }

    writer.flush()?;
    info!("Timing report saved to {} with {} segments", filename, report.segments.len());
    Ok(filename)
}
